//! Error types for SMTP operations

use shoutbox_core::{CoreError, ErrorKind};
use thiserror::Error;

/// Result type for SMTP operations
pub type SmtpResult<T> = Result<T, SmtpError>;

/// Errors that can occur during SMTP operations
#[derive(Debug, Error)]
pub enum SmtpError {
    /// Connection failed
    #[error("Failed to connect to SMTP server: {0}")]
    ConnectionFailed(String),

    /// No answer from the server in time
    #[error("SMTP server timed out: {0}")]
    Timeout(String),

    /// Authentication failed
    #[error("SMTP authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Server answered with a transient or permanent error reply
    #[error("SMTP server rejected the message: {message}")]
    Rejected {
        code: Option<String>,
        message: String,
    },

    /// Failed to send message
    #[error("Failed to send message: {0}")]
    SendFailed(String),

    /// Invalid email address
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Header that would corrupt the message
    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Message building error
    #[error("Failed to build message: {0}")]
    MessageBuildError(String),

    /// TLS error
    #[error("TLS error: {0}")]
    TlsError(String),
}

impl SmtpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SmtpError::InvalidAddress(_)
            | SmtpError::InvalidHeader { .. }
            | SmtpError::MessageBuildError(_)
            | SmtpError::TlsError(_) => ErrorKind::Construction,
            SmtpError::ConnectionFailed(_) | SmtpError::Timeout(_) | SmtpError::SendFailed(_) => {
                ErrorKind::Transport
            }
            SmtpError::AuthenticationFailed(_) | SmtpError::Rejected { .. } => ErrorKind::Protocol,
        }
    }
}

impl From<CoreError> for SmtpError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidAddress(address) => SmtpError::InvalidAddress(address),
            CoreError::InvalidHeader { name, reason } => SmtpError::InvalidHeader { name, reason },
            other => SmtpError::MessageBuildError(other.to_string()),
        }
    }
}

impl From<lettre::transport::smtp::Error> for SmtpError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        if e.is_timeout() {
            return SmtpError::Timeout(e.to_string());
        }

        if e.is_permanent() || e.is_transient() {
            let code = e.status().map(|code| code.to_string());
            // 535: authentication credentials invalid
            if code.as_deref() == Some("535") {
                return SmtpError::AuthenticationFailed(e.to_string());
            }
            return SmtpError::Rejected {
                code,
                message: e.to_string(),
            };
        }

        if e.is_client() {
            SmtpError::SendFailed(e.to_string())
        } else {
            SmtpError::ConnectionFailed(e.to_string())
        }
    }
}
