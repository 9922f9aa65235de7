// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the invoice service.

use super::types::{OcrModel, ProcessingAck, ResultResponse, UploadReceipt};
use crate::diagnostics::{DiagnosticEvent, DiagnosticsHandle};
use crate::error::ApiError;
use std::path::Path;
use std::time::Duration;

/// Thin wrapper over `reqwest` that owns the base URL, the request timeout,
/// and the request-lifecycle diagnostics.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Client {
    /// Builds a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("FakturaLens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            diagnostics: None,
        })
    }

    /// Sets the diagnostics handle for request-lifecycle logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Uploads an invoice file as multipart form data.
    pub async fn upload_invoice(&self, path: &Path) -> Result<UploadReceipt, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "invoice".to_string());
        let mime = mime_for_extension(path);

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .execute("upload", self.http.post(self.endpoint("/upload")).multipart(form))
            .await?;
        decode_json(response).await
    }

    /// Schedules background processing of an uploaded invoice.
    pub async fn start_processing(
        &self,
        upload_id: i64,
        model: OcrModel,
    ) -> Result<ProcessingAck, ApiError> {
        let url = self.endpoint(&format!("/process/{upload_id}"));
        let request = self.http.post(url).query(&[("model", model.as_param())]);
        let response = self.execute("process", request).await?;
        decode_json(response).await
    }

    /// Fetches the processing state or the finished result for an upload.
    pub async fn fetch_result(&self, upload_id: i64) -> Result<ResultResponse, ApiError> {
        let url = self.endpoint(&format!("/api/result/{upload_id}"));
        let response = self.execute("fetch-result", self.http.get(url)).await?;
        decode_json(response).await
    }

    /// Asks the service whether it is alive.
    pub async fn health_check(&self) -> Result<(), ApiError> {
        self.execute("health", self.http.get(self.endpoint("/health")))
            .await
            .map(|_| ())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request, logging the exchange lifecycle. Non-success statuses
    /// become [`ApiError::Status`] carrying the status code and raw body.
    async fn execute(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        self.log(DiagnosticEvent::RequestStarted { operation });

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.log(DiagnosticEvent::RequestFailed {
                    operation,
                    status: None,
                });
                return Err(ApiError::Transport(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        self.log(DiagnosticEvent::RequestCompleted { operation, status });

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            self.log(DiagnosticEvent::RequestFailed {
                operation,
                status: Some(status),
            });
            return Err(ApiError::Status { status, body });
        }

        Ok(response)
    }

    fn log(&self, event: DiagnosticEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }
}

/// MIME type inferred from the file extension; the service only checks the
/// PDF/image prefix, so unknown extensions fall back to a generic type.
fn mime_for_extension(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

async fn decode_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client =
            Client::new("http://localhost:8000/", Duration::from_secs(5)).expect("build client");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.endpoint("/health"), "http://localhost:8000/health");
    }

    #[test]
    fn mime_type_follows_extension() {
        assert_eq!(
            mime_for_extension(&PathBuf::from("faktura.pdf")),
            "application/pdf"
        );
        assert_eq!(
            mime_for_extension(&PathBuf::from("scan.JPG")),
            "image/jpeg"
        );
        assert_eq!(
            mime_for_extension(&PathBuf::from("scan.png")),
            "image/png"
        );
        assert_eq!(
            mime_for_extension(&PathBuf::from("no_extension")),
            "application/octet-stream"
        );
    }
}
