// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Specific error types for failed exchanges with the invoice service.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The server answered with a non-success HTTP status.
    /// Carries the status code and the raw response body.
    Status { status: u16, body: String },

    /// The request never completed (connection refused, timeout, DNS).
    Transport(String),

    /// The response arrived but its body could not be decoded.
    InvalidResponse(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Status { .. } => "notification-request-error",
            ApiError::Transport(_) => "notification-request-transport-error",
            ApiError::InvalidResponse(_) => "notification-request-invalid-response",
        }
    }

    /// HTTP status code of the failed exchange, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::InvalidResponse(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "Server returned status {}", status)
                } else {
                    write!(f, "Server returned status {}: {}", status, body)
                }
            }
            ApiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ApiError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn api_status_error_carries_code_and_body() {
        let err = ApiError::Status {
            status: 404,
            body: "Soubor nebyl nalezen".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        let rendered = format!("{}", err);
        assert!(rendered.contains("404"));
        assert!(rendered.contains("Soubor nebyl nalezen"));
    }

    #[test]
    fn transport_error_has_no_status() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn api_error_i18n_keys() {
        assert_eq!(
            ApiError::Status {
                status: 500,
                body: String::new()
            }
            .i18n_key(),
            "notification-request-error"
        );
        assert_eq!(
            ApiError::Transport(String::new()).i18n_key(),
            "notification-request-transport-error"
        );
        assert_eq!(
            ApiError::InvalidResponse(String::new()).i18n_key(),
            "notification-request-invalid-response"
        );
    }

    #[test]
    fn api_error_converts_to_error() {
        let err: Error = ApiError::Transport("timeout".to_string()).into();
        assert!(matches!(err, Error::Api(ApiError::Transport(_))));
    }
}
