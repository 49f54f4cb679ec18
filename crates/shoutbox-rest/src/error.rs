//! Error types for REST operations

use shoutbox_core::{CoreError, ErrorKind};
use thiserror::Error;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// Errors that can occur while sending through the REST API
#[derive(Debug, Error)]
pub enum RestError {
    /// Request could not be serialized
    #[error("error marshaling request: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Request fields that cannot be sent as-is
    #[error(transparent)]
    InvalidRequest(#[from] CoreError),

    /// Configured base URL is unusable
    #[error("invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// HTTP request could not complete
    #[error("error sending request: {0}")]
    Request(#[source] reqwest::Error),

    /// No response before the deadline
    #[error("request timed out")]
    Timeout,

    /// Non-200 response with an error message from the API
    #[error("api error: {message}")]
    Api { status: u16, message: String },

    /// Non-200 response without a readable error message
    #[error("error response with status {status}")]
    Status { status: u16 },
}

impl RestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RestError::Serialize(_)
            | RestError::InvalidRequest(_)
            | RestError::InvalidBaseUrl { .. } => ErrorKind::Construction,
            RestError::Request(e) if e.is_builder() => ErrorKind::Construction,
            RestError::Request(_) | RestError::Timeout => ErrorKind::Transport,
            RestError::Api { .. } | RestError::Status { .. } => ErrorKind::Protocol,
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            RestError::Api { status, .. } | RestError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RestError::Timeout
        } else {
            RestError::Request(e)
        }
    }
}
