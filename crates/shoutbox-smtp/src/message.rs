//! Outgoing SMTP message model

use shoutbox_core::{Attachment, Headers};

/// Email message to send over SMTP
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailMessage {
    /// From address
    pub from: String,
    /// To addresses, in header order
    pub to: Vec<String>,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html: String,
    /// From display name
    pub name: Option<String>,
    /// Reply-To address
    pub reply_to: Option<String>,
    /// Extra headers, written after the standard ones
    pub headers: Headers,
    /// File attachments
    pub attachments: Vec<Attachment>,
}

impl EmailMessage {
    /// Create a new message builder
    pub fn new(from: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    /// Add a To recipient
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to.push(address.into());
        self
    }

    /// Set the HTML body
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html = body.into();
        self
    }

    /// Set the from display name
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

    /// Add an attachment
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}
