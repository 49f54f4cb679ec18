//! Error types shared by both transports

use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Which phase of a send a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input could not be turned into a request; nothing was sent
    Construction,
    /// The network exchange could not complete (DNS, connect, TLS, timeout)
    Transport,
    /// The remote peer answered and rejected the message
    Protocol,
}

/// Errors raised while building requests and messages
#[derive(Debug, Error)]
pub enum CoreError {
    /// Attachment file could not be read
    #[error("error reading file {}: {source}", .path.display())]
    AttachmentFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Attachment reader failed before reaching end of input
    #[error("error reading content for {filename}: {source}")]
    AttachmentRead {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    /// Address without an "@"
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// Header name or value that cannot be written safely
    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
}

impl CoreError {
    /// Every core error happens before anything touches the network
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Construction
    }
}
