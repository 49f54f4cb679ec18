//! File attachments
//!
//! Content is buffered in memory in full. The service caps attachments at
//! [`crate::MAX_ATTACHMENT_SIZE`], so there is no streaming path.

use crate::{CoreError, CoreResult};
use std::io::Read;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

/// Content type used when nothing better can be inferred
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// An attachment to include in an outgoing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Filename to display
    pub filename: String,
    /// Raw file data
    pub content: Vec<u8>,
    /// MIME type (e.g., "application/pdf"), never empty
    pub content_type: String,
}

impl Attachment {
    /// Create an attachment from bytes already in memory
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        let filename = filename.into();
        let content_type = content_type_for(&filename);
        Self {
            filename,
            content,
            content_type,
        }
    }

    /// Read a file from disk; the filename is the last path component
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|source| CoreError::AttachmentFile {
            path: path.to_path_buf(),
            source,
        })?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!("Loaded attachment {} ({} bytes)", filename, content.len());
        Ok(Self::new(filename, content))
    }

    /// Read `reader` to the end and name the result `filename`
    pub fn from_reader<R: Read>(mut reader: R, filename: impl Into<String>) -> CoreResult<Self> {
        let filename = filename.into();
        let mut content = Vec::new();
        if let Err(source) = reader.read_to_end(&mut content) {
            return Err(CoreError::AttachmentRead { filename, source });
        }
        Ok(Self::new(filename, content))
    }

    /// Async counterpart of [`Attachment::from_reader`]
    pub async fn from_async_reader<R>(mut reader: R, filename: impl Into<String>) -> CoreResult<Self>
    where
        R: AsyncRead + Unpin,
    {
        let filename = filename.into();
        let mut content = Vec::new();
        if let Err(source) = reader.read_to_end(&mut content).await {
            return Err(CoreError::AttachmentRead { filename, source });
        }
        Ok(Self::new(filename, content))
    }

    /// Override the inferred content type. An empty value is ignored.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        if !content_type.trim().is_empty() {
            self.content_type = content_type;
        }
        self
    }
}

/// Infer a content type from the filename's extension
fn content_type_for(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string())
}
