//! Send the same greeting through both transports, reporting each outcome
use anyhow::Context;
use shoutbox::{Client, EmailMessage, EmailRequest, SmtpClient};
use tracing::{error, info};

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
    let from = std::env::var("SHOUTBOX_FROM").unwrap_or_default();
    let to = std::env::var("SHOUTBOX_TO").unwrap_or_default();

    let rest = Client::new(api_key.clone());
    let request = EmailRequest::new(&from, "Test from REST API")
        .to(&to)
        .html("<h1>REST API Test</h1><p>This email was sent using the REST API client.</p>");

    match rest.send_email(&request).await {
        Ok(()) => info!("REST API email sent successfully!"),
        Err(e) => error!("REST API error ({:?}): {}", e.kind(), e),
    }

    let smtp = SmtpClient::new(api_key);
    let message = EmailMessage::new(&from, "Test from SMTP")
        .to(&to)
        .html("<h1>SMTP Test</h1><p>This email was sent using the SMTP client.</p>");

    match smtp.send_email(&message).await {
        Ok(()) => info!("SMTP email sent successfully!"),
        Err(e) => error!("SMTP error ({:?}): {}", e.kind(), e),
    }

    Ok(())
}
