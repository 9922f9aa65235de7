// SPDX-License-Identifier: MPL-2.0
//! Wire types for the invoice service's JSON API.

use serde::Deserialize;
use std::fmt;

/// Language models the service can run invoice extraction with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcrModel {
    #[default]
    Llama3,
    Mistral,
}

impl OcrModel {
    pub const ALL: [OcrModel; 2] = [OcrModel::Llama3, OcrModel::Mistral];

    /// Value sent as the `model` query parameter.
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            OcrModel::Llama3 => "llama3",
            OcrModel::Mistral => "mistral",
        }
    }

    /// Parses the configuration representation back into a model.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "llama3" => Some(OcrModel::Llama3),
            "mistral" => Some(OcrModel::Mistral),
            _ => None,
        }
    }
}

impl fmt::Display for OcrModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OcrModel::Llama3 => write!(f, "Llama 3"),
            OcrModel::Mistral => write!(f, "Mistral"),
        }
    }
}

/// Receipt returned by the upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    /// Server-side id of the uploaded file; all later calls use it.
    pub id: i64,
    /// Name the file was uploaded under.
    pub original_filename: String,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Acknowledgement that background processing was scheduled.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessingAck {
    pub status: String,
    pub upload_id: i64,
}

/// Answer of the result endpoint: either "still processing" or the full
/// extracted record. The two shapes share no required fields, so serde can
/// tell them apart without a tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResultResponse {
    Pending(ProcessingAck),
    Ready(Box<InvoiceResult>),
}

/// Invoice fields extracted by the service.
///
/// Dates stay as the ISO-8601 strings the server sends; display formatting
/// happens in [`crate::i18n::format`].
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceResult {
    pub id: i64,
    pub upload_id: i64,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub invoice_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub vat_amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub supplier_tax_id: Option<String>,
    #[serde(default)]
    pub supplier_vat_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_tax_id: Option<String>,
    #[serde(default)]
    pub customer_vat_id: Option<String>,
    #[serde(default)]
    pub processed_date: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub llm_model_used: Option<String>,
}
