// SPDX-License-Identifier: MPL-2.0
//! Request layer for the invoice OCR service.
//!
//! All HTTP exchange with the server lives here: uploading invoice files,
//! kicking off background processing, and polling for the extracted result.
//! The rest of the application only sees [`Client`] methods returning typed
//! results, and the [`crate::error::ApiError`] taxonomy on failure.
//!
//! The client announces each exchange through its diagnostics handle
//! (request started / completed / failed) so the application log shows the
//! full request lifecycle without any component having to ask.

mod client;
mod types;

pub use client::Client;
pub use types::{InvoiceResult, OcrModel, ProcessingAck, ResultResponse, UploadReceipt};
