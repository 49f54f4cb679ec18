//! SMTP transport for Shoutbox
//!
//! Assembles a multipart/mixed MIME document (HTML body plus base64
//! attachments) and submits it to the Shoutbox relay with PLAIN
//! authentication, the API key serving as password.

mod client;
mod error;
mod message;
mod mime;

pub use client::{SmtpClient, SmtpConfig, SmtpSecurity};
pub use error::{SmtpError, SmtpResult};
pub use message::EmailMessage;
pub use mime::{build_mime_message, build_mime_message_with_boundary};
