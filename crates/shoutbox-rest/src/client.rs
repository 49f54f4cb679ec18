//! REST API client

use crate::{EmailRequest, RestError, RestResult};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use shoutbox_core::DEFAULT_API_BASE_URL;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("shoutbox-rust/", env!("CARGO_PKG_VERSION"));

/// REST endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestConfig {
    /// API base URL; requests go to `<base_url>/send`
    pub base_url: String,
    /// Per-request timeout in seconds, `None` to wait indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: Some(30),
        }
    }
}

impl RestConfig {
    /// Resolve the send endpoint, rejecting anything that is not http(s)
    fn send_url(&self) -> RestResult<String> {
        let invalid = |reason: String| RestError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        let url = Url::parse(&format!("{}/send", self.base_url.trim_end_matches('/')))
            .map_err(|e| invalid(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(url.into()),
            other => Err(invalid(format!("unsupported scheme {}", other))),
        }
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Shoutbox REST API client
///
/// Holds no mutable state; clone it or share it across tasks freely.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    send_url: String,
    timeout: Option<Duration>,
}

impl Client {
    /// Create a client for the public Shoutbox API
    pub fn new(api_key: impl Into<String>) -> Self {
        let config = RestConfig::default();
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            send_url: format!("{}/send", DEFAULT_API_BASE_URL),
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }

    /// Create a client with a custom endpoint or timeout
    pub fn with_config(api_key: impl Into<String>, config: RestConfig) -> RestResult<Self> {
        Self::with_http_client(api_key, config, reqwest::Client::new())
    }

    /// Create a client that reuses an existing `reqwest::Client`
    pub fn with_http_client(
        api_key: impl Into<String>,
        config: RestConfig,
        http: reqwest::Client,
    ) -> RestResult<Self> {
        let send_url = config.send_url()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            send_url,
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }

    /// The endpoint requests are posted to
    pub fn send_url(&self) -> &str {
        &self.send_url
    }

    /// Send an email; succeeds only when the API answers 200
    pub async fn send_email(&self, request: &EmailRequest) -> RestResult<()> {
        info!("Sending email via Shoutbox REST API");

        request.headers.validate()?;
        let body = serde_json::to_vec(request)?;
        debug!("REST send request body length: {} bytes", body.len());

        let mut builder = self
            .http
            .post(&self.send_url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .body(body);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        let status = response.status();
        debug!("REST send response status: {}", status);

        if status == StatusCode::OK {
            info!("Email sent successfully via REST API");
            return Ok(());
        }

        // An unreadable body is reported the same as an unparseable one
        let body = response.bytes().await.unwrap_or_default();
        let err = error_from_response(status.as_u16(), &body);
        warn!("REST send failed: {}", err);
        Err(err)
    }

    /// Send an email, giving up once `timeout` has elapsed
    pub async fn send_email_with_timeout(
        &self,
        request: &EmailRequest,
        timeout: Duration,
    ) -> RestResult<()> {
        tokio::time::timeout(timeout, self.send_email(request))
            .await
            .map_err(|_| RestError::Timeout)?
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("send_url", &self.send_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Map a non-200 response to an error, preferring the API's own message
fn error_from_response(status: u16, body: &[u8]) -> RestError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(parsed) if !parsed.error.is_empty() => RestError::Api {
            status,
            message: parsed.error,
        },
        _ => RestError::Status { status },
    }
}
