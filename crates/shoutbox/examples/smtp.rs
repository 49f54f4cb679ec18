//! Send an email with an attachment through the SMTP relay
//!
//! Needs SHOUTBOX_API_KEY, SHOUTBOX_FROM and SHOUTBOX_TO.
use anyhow::Context;
use shoutbox::{Attachment, EmailMessage, SmtpClient};
use std::io::Write;
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
    let to = std::env::var("SHOUTBOX_TO").context("SHOUTBOX_TO environment variable is not set")?;

    let client = SmtpClient::new(api_key);

    // Removed when dropped
    let mut file = tempfile::Builder::new()
        .prefix("test")
        .suffix(".txt")
        .tempfile()?;
    file.write_all(b"This is a test attachment.")?;
    let attachment =
        Attachment::from_file(file.path()).context("Failed to create attachment")?;

    let message = EmailMessage::new(&from, "Hello from Shoutbox SMTP")
        .to(&to)
        .html(concat!(
            "<h1>Hello!</h1>",
            "<p>This email was sent using the Shoutbox SMTP client.</p>",
            "<p>It includes a text file attachment.</p>",
        ))
        .name("Shoutbox Test")
        .reply_to(&from)
        .header("X-Application", "Shoutbox SMTP Example")
        .attachment(attachment);

    client
        .send_email(&message)
        .await
        .context("Failed to send email")?;
    info!("Email sent successfully!");

    let basic = EmailMessage::new(&from, "Basic SMTP Test")
        .to(&to)
        .html("<h1>Basic Test</h1><p>This is a basic email without attachments.</p>");

    client
        .send_email(&basic)
        .await
        .context("Failed to send basic email")?;
    info!("Basic email sent successfully!");

    Ok(())
}
