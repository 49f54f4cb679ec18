//! Shared building blocks for the Shoutbox email client
//!
//! Holds the pieces both transports agree on: attachments, ordered custom
//! headers, address validation helpers, the service defaults and the
//! failure taxonomy every transport error maps onto.

mod attachment;
mod error;
mod headers;
mod validate;

pub use attachment::{Attachment, DEFAULT_CONTENT_TYPE};
pub use error::{CoreError, CoreResult, ErrorKind};
pub use headers::{validate_header_name, validate_header_value, Headers};
pub use validate::{validate_email, validate_email_list};

/// Base URL of the Shoutbox REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.shoutbox.net";

/// Shoutbox SMTP relay host
pub const DEFAULT_SMTP_HOST: &str = "mail.shoutbox.net";

/// Shoutbox SMTP submission port (STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP username; the password is the API key
pub const DEFAULT_SMTP_USERNAME: &str = "shoutbox";

/// Requests per minute allowed per API key. Enforced by the service only.
pub const RATE_LIMIT_PER_MINUTE: u32 = 60;

/// Largest attachment the service accepts, in bytes. Enforced by the service only.
pub const MAX_ATTACHMENT_SIZE: usize = 10 * 1024 * 1024;

/// Most recipients the service accepts per email. Enforced by the service only.
pub const MAX_RECIPIENTS: usize = 50;
