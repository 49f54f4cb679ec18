//! Send one email through the REST API
//!
//! Needs SHOUTBOX_API_KEY, SHOUTBOX_FROM and SHOUTBOX_TO.
use anyhow::Context;
use shoutbox::{Client, EmailRequest};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let api_key = std::env::var("SHOUTBOX_API_KEY")
        .context("SHOUTBOX_API_KEY environment variable is not set")?;
    let from = std::env::var("SHOUTBOX_FROM").context("SHOUTBOX_FROM is not set")?;
    let to = std::env::var("SHOUTBOX_TO").context("SHOUTBOX_TO is not set")?;

    let client = Client::new(api_key);

    let request = EmailRequest::new(&from, "Hello from Shoutbox REST API")
        .to(&to)
        .html("<h1>Hello!</h1><p>This email was sent using the Shoutbox REST API client.</p>")
        .name("Shoutbox Test")
        .reply_to(&from)
        .header("X-Application", "Shoutbox Example");

    client
        .send_email(&request)
        .await
        .context("Failed to send email")?;

    info!("Email sent successfully!");
    Ok(())
}
