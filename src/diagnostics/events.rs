// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::fmt;

/// Events captured during application usage.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEvent {
    /// An HTTP exchange is about to be sent.
    RequestStarted {
        /// Short operation name, e.g. `upload` or `fetch-result`.
        operation: &'static str,
    },

    /// An HTTP exchange completed with a status code (success or failure).
    RequestCompleted {
        operation: &'static str,
        status: u16,
    },

    /// An HTTP exchange failed. `status` is absent for transport failures
    /// that never produced a response.
    RequestFailed {
        operation: &'static str,
        status: Option<u16>,
    },

    /// The user picked a file in the selection dialog.
    FileSelected { name: String },

    /// Result polling began for an upload.
    PollingStarted { upload_id: i64 },

    /// A notification became visible to the user.
    NotificationShown {
        severity: &'static str,
        message_key: String,
    },

    /// A configuration or state file could not be loaded or saved.
    StorageWarning { message: String },
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEvent::RequestStarted { operation } => {
                write!(f, "request started: {}", operation)
            }
            DiagnosticEvent::RequestCompleted { operation, status } => {
                write!(f, "request completed: {} (status {})", operation, status)
            }
            DiagnosticEvent::RequestFailed {
                operation,
                status: Some(status),
            } => write!(f, "request failed: {} (status {})", operation, status),
            DiagnosticEvent::RequestFailed {
                operation,
                status: None,
            } => write!(f, "request failed: {} (no response)", operation),
            DiagnosticEvent::FileSelected { name } => write!(f, "file selected: {}", name),
            DiagnosticEvent::PollingStarted { upload_id } => {
                write!(f, "watching processing status of upload {}", upload_id)
            }
            DiagnosticEvent::NotificationShown {
                severity,
                message_key,
            } => write!(f, "notification shown: {} {}", severity, message_key),
            DiagnosticEvent::StorageWarning { message } => {
                write!(f, "storage warning: {}", message)
            }
        }
    }
}
