//! Shoutbox email client
//!
//! Two interchangeable transports for transactional email:
//!
//! - [`Client`] posts an [`EmailRequest`] to the REST API
//! - [`SmtpClient`] submits an [`EmailMessage`] (with optional
//!   [`Attachment`]s) to the SMTP relay
//!
//! Neither retries or rate limits; the service allows
//! [`RATE_LIMIT_PER_MINUTE`] requests per key.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use shoutbox::{Client, EmailRequest};
//!
//! let client = Client::new("your-api-key");
//! let request = EmailRequest::new("no-reply@example.com", "Welcome")
//!     .to("user@example.com")
//!     .html("<h1>Hello!</h1>");
//! client.send_email(&request).await?;
//! # Ok(())
//! # }
//! ```

pub use shoutbox_core::{
    validate_email, validate_email_list, Attachment, CoreError, CoreResult, ErrorKind, Headers,
    DEFAULT_API_BASE_URL, DEFAULT_CONTENT_TYPE, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT,
    DEFAULT_SMTP_USERNAME, MAX_ATTACHMENT_SIZE, MAX_RECIPIENTS, RATE_LIMIT_PER_MINUTE,
};
pub use shoutbox_rest::{Client, EmailRequest, RestConfig, RestError, RestResult};
pub use shoutbox_smtp::{
    build_mime_message, build_mime_message_with_boundary, EmailMessage, SmtpClient, SmtpConfig,
    SmtpError, SmtpResult, SmtpSecurity,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp_header_lines(msg: &EmailMessage) -> Vec<String> {
        let raw = String::from_utf8(build_mime_message_with_boundary(msg, "b0undary").unwrap()).unwrap();
        let (headers, _) = raw.split_once("\r\n\r\n").unwrap();
        headers.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_reply_to_on_both_transports() {
        let request = EmailRequest::new("from@example.com", "Hi")
            .to("to@example.com")
            .reply_to("reply@example.com");
        let message = EmailMessage::new("from@example.com", "Hi")
            .to("to@example.com")
            .reply_to("reply@example.com");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["reply_to"], "reply@example.com");
        assert!(smtp_header_lines(&message).contains(&"Reply-To: reply@example.com".to_string()));

        let request = EmailRequest::new("from@example.com", "Hi").to("to@example.com");
        let message = EmailMessage::new("from@example.com", "Hi").to("to@example.com");

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("reply_to").is_none());
        assert!(!smtp_header_lines(&message)
            .iter()
            .any(|line| line.starts_with("Reply-To")));
    }

    #[test]
    fn test_same_custom_headers_on_both_transports() {
        let headers: Headers = [("X-Campaign", "spring"), ("X-Application", "demo")]
            .into_iter()
            .collect();

        let request = EmailRequest {
            headers: headers.clone(),
            ..EmailRequest::new("from@example.com", "Hi").to("to@example.com")
        };
        let message = EmailMessage {
            headers,
            ..EmailMessage::new("from@example.com", "Hi").to("to@example.com")
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""headers":{"X-Campaign":"spring","X-Application":"demo"}"#));

        let lines = smtp_header_lines(&message);
        let tail: Vec<&str> = lines.iter().rev().take(2).rev().map(String::as_str).collect();
        assert_eq!(tail, vec!["X-Campaign: spring", "X-Application: demo"]);
    }
}
