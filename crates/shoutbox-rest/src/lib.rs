//! REST transport for Shoutbox
//!
//! Sends email with a single authenticated `POST /send` carrying a JSON
//! payload. No retries are performed; callers own retry and rate limiting.

mod client;
mod error;
mod request;

pub use client::{Client, RestConfig};
pub use error::{RestError, RestResult};
pub use request::EmailRequest;
