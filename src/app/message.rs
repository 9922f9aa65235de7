// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{ProcessingAck, ResultResponse, UploadReceipt};
use crate::error::ApiError;
use crate::ui::notifications;
use crate::ui::result;
use crate::ui::upload;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Upload(upload::Message),
    Result(result::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog; `None` when the user cancelled.
    FileDialogResult(Option<PathBuf>),
    /// Result from uploading the invoice file.
    UploadCompleted(Result<UploadReceipt, ApiError>),
    /// Result from scheduling background processing.
    ProcessingStarted(Result<ProcessingAck, ApiError>),
    /// Result from polling the result endpoint.
    ResultFetched(Result<ResultResponse, ApiError>),
    /// Periodic poll trigger while the server processes an upload.
    PollTick(Instant),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `cs`, `en-US`).
    pub lang: Option<String>,
    /// Optional server base URL override (e.g. `http://faktury.local:8000`).
    pub server: Option<String>,
    /// Optional invoice file to preselect on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FAKTURA_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `FAKTURA_LENS_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
}
