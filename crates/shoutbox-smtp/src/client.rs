//! SMTP client implementation

use crate::{build_mime_message, EmailMessage, SmtpError, SmtpResult};
use lettre::{
    address::Envelope,
    transport::smtp::authentication::{Credentials, Mechanism},
    Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};
use serde::{Deserialize, Serialize};
use shoutbox_core::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT, DEFAULT_SMTP_USERNAME};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How the SMTP session is secured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// Plain connection upgraded with STARTTLS (port 587)
    #[default]
    StartTls,
    /// TLS from the first byte (port 465)
    Tls,
    /// No encryption. Only for local test relays.
    None,
}

/// SMTP relay configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,
    /// SMTP server port
    pub port: u16,
    /// Username for PLAIN authentication
    pub username: String,
    /// Connection security
    pub security: SmtpSecurity,
    /// Timeout for each SMTP command, `None` to wait indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            username: DEFAULT_SMTP_USERNAME.to_string(),
            security: SmtpSecurity::StartTls,
            timeout_secs: Some(60),
        }
    }
}

/// SMTP client for sending emails through the Shoutbox relay
///
/// Each send opens its own session; the client itself is immutable and can
/// be shared between tasks.
#[derive(Clone)]
pub struct SmtpClient {
    config: SmtpConfig,
    api_key: String,
}

impl SmtpClient {
    /// Create a client for the Shoutbox relay
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, SmtpConfig::default())
    }

    /// Create a client for a custom relay
    pub fn with_config(api_key: impl Into<String>, config: SmtpConfig) -> Self {
        Self {
            config,
            api_key: api_key.into(),
        }
    }

    pub fn config(&self) -> &SmtpConfig {
        &self.config
    }

    /// Send a message using password authentication (PLAIN mechanism)
    pub async fn send_email(&self, message: &EmailMessage) -> SmtpResult<()> {
        info!(
            "Sending email via SMTP to {} recipient(s) with {} attachment(s)",
            message.to.len(),
            message.attachments.len()
        );

        let raw = build_mime_message(message)?;
        let envelope = envelope_for(message)?;
        debug!("Built MIME message of {} bytes", raw.len());

        let transport = self.transport()?;
        if let Err(e) = transport.send_raw(&envelope, &raw).await {
            let err = SmtpError::from(e);
            warn!("SMTP send failed: {}", err);
            return Err(err);
        }

        info!("Email sent successfully");
        Ok(())
    }

    /// Connect, authenticate and disconnect without sending anything
    pub async fn test_connection(&self) -> SmtpResult<bool> {
        let transport = self.transport()?;
        Ok(transport.test_connection().await?)
    }

    fn transport(&self) -> SmtpResult<AsyncSmtpTransport<Tokio1Executor>> {
        let host = self.config.host.as_str();
        let builder = match self.config.security {
            SmtpSecurity::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                .map_err(|e| SmtpError::TlsError(e.to_string()))?,
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| SmtpError::TlsError(e.to_string()))?,
            SmtpSecurity::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host),
        };

        Ok(builder
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.api_key.clone(),
            ))
            .authentication(vec![Mechanism::Plain])
            .timeout(self.config.timeout_secs.map(Duration::from_secs))
            .build())
    }
}

impl fmt::Debug for SmtpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpClient")
            .field("config", &self.config)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Envelope sender is `from`, envelope recipients are the To list
fn envelope_for(message: &EmailMessage) -> SmtpResult<Envelope> {
    let parse = |address: &str| {
        address
            .parse::<Address>()
            .map_err(|e| SmtpError::InvalidAddress(format!("{}: {}", address, e)))
    };

    let from = parse(&message.from)?;
    let to = message
        .to
        .iter()
        .map(|address| parse(address))
        .collect::<SmtpResult<Vec<_>>>()?;

    Envelope::new(Some(from), to).map_err(|e| SmtpError::MessageBuildError(e.to_string()))
}
