//! JSON request body for `POST /send`

use serde::Serialize;
use shoutbox_core::Headers;

/// An email sent through the REST API
///
/// Unset or empty optional fields are left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmailRequest {
    /// Sender address
    pub from: String,
    /// Recipients, comma separated
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
    /// Sender display name
    #[serde(skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    /// Reply-To address
    #[serde(skip_serializing_if = "is_blank")]
    pub reply_to: Option<String>,
    /// Extra headers for the delivered message
    #[serde(skip_serializing_if = "Headers::is_empty")]
    pub headers: Headers,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

impl EmailRequest {
    /// Create a new request builder
    pub fn new(from: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Add a recipient
    pub fn to(mut self, address: impl AsRef<str>) -> Self {
        if !self.to.is_empty() {
            self.to.push(',');
        }
        self.to.push_str(address.as_ref());
        self
    }

    /// Replace the recipient list
    pub fn recipients<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.to.clear();
        for address in addresses {
            self = self.to(address);
        }
        self
    }

    /// Set the HTML body
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html = body.into();
        self
    }

    /// Set the sender display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the Reply-To address
    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to = Some(address.into());
        self
    }

    /// Add a custom header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Individual recipient addresses, for use with the validation helpers
    pub fn recipient_list(&self) -> impl Iterator<Item = &str> {
        self.to
            .split(',')
            .map(str::trim)
            .filter(|address| !address.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use shoutbox_core::validate_email_list;

    #[test]
    fn test_minimal_request_omits_optionals() {
        let req = EmailRequest::new("sender@example.com", "Hi")
            .to("rcpt@example.com")
            .html("<p>Hello</p>");

        let value: Value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "from": "sender@example.com",
                "to": "rcpt@example.com",
                "subject": "Hi",
                "html": "<p>Hello</p>",
            })
        );

        let object = value.as_object().unwrap();
        assert!(!object.contains_key("name"));
        assert!(!object.contains_key("reply_to"));
        assert!(!object.contains_key("headers"));
    }

    #[test]
    fn test_empty_optionals_are_omitted() {
        let req = EmailRequest::new("sender@example.com", "Hi")
            .to("rcpt@example.com")
            .name("")
            .reply_to("");

        let value: Value = serde_json::to_value(&req).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("name"));
        assert!(!object.contains_key("reply_to"));
        assert_eq!(object.len(), 4);
    }

    #[test]
    fn test_full_request_keeps_every_field() {
        let req = EmailRequest::new("sender@example.com", "Hello")
            .to("a@example.com")
            .to("b@example.com")
            .html("<h1>Hello!</h1>")
            .name("Shoutbox Test")
            .reply_to("replies@example.com")
            .header("X-Application", "Shoutbox Example");

        let value: Value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["to"], "a@example.com,b@example.com");
        assert_eq!(value["name"], "Shoutbox Test");
        assert_eq!(value["reply_to"], "replies@example.com");
        assert_eq!(value["headers"], json!({ "X-Application": "Shoutbox Example" }));
    }

    #[test]
    fn test_recipients() {
        let req = EmailRequest::new("s@example.com", "s")
            .to("old@example.com")
            .recipients(["one@example.com", "two@example.com"]);
        assert_eq!(req.to, "one@example.com,two@example.com");

        let listed: Vec<_> = req.recipient_list().collect();
        assert_eq!(listed, vec!["one@example.com", "two@example.com"]);
        assert!(validate_email_list(req.recipient_list()).is_ok());

        let spaced = EmailRequest {
            to: "a@x.io, b@x.io,".to_string(),
            ..EmailRequest::default()
        };
        assert_eq!(spaced.recipient_list().count(), 2);
    }
}
