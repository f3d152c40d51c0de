//! Errors produced by the analysis service client.
//!
//! Each variant maps onto one of the alerts shown to the user: the
//! service's own message for rejected uploads, a generic connectivity
//! message for everything else.

use thiserror::Error;

/// Shown when the service rejects an upload without saying why.
pub const SERVER_ERROR_FALLBACK: &str = "The server encountered an error.";

/// Shown for any failure where no usable response arrived.
pub const CONNECTIVITY_MESSAGE: &str = "Failed to connect to the server.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the response could not be read
    #[error("Connection failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Service answered with a non-success status
    #[error("Server error: {status} - {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// Non-success status and a body that is not JSON at all, e.g. an
    /// HTML error page from a proxy in front of the service
    #[error("Server error: {status} with unreadable body: {source}")]
    UnreadableFailure {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Success status but the body was not the expected JSON
    #[error("Malformed response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// True when the service itself reported the failure.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, ApiError::Server { .. })
    }

    /// Text for the user-facing alert.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message
                .clone()
                .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string()),
            ApiError::Transport { .. }
            | ApiError::Timeout { .. }
            | ApiError::UnreadableFailure { .. }
            | ApiError::Decode { .. } => CONNECTIVITY_MESSAGE.to_string(),
        }
    }
}
