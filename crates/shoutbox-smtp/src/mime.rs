//! MIME multipart/mixed assembly
//!
//! Layout of the produced document:
//!
//! - header block: From, To, Subject, MIME-Version, Content-Type, optional
//!   Reply-To, then custom headers in insertion order
//! - one `text/html` part, quoted-printable encoded
//! - one base64 part per attachment
//!
//! Lines end in CRLF as SMTP DATA expects.

use crate::{EmailMessage, SmtpError, SmtpResult};
use base64::Engine;
use lettre::message::header::{self, Header};
use lettre::message::Mailbox;
use lettre::Address;
use shoutbox_core::{validate_header_name, validate_header_value, Attachment};

/// Headers the document structure depends on; callers may not override them
const STRUCTURAL_HEADERS: [&str; 3] = ["MIME-Version", "Content-Type", "Content-Transfer-Encoding"];

const BASE64_LINE_LEN: usize = 76;

/// Build the raw message with a freshly generated boundary
pub fn build_mime_message(msg: &EmailMessage) -> SmtpResult<Vec<u8>> {
    build_mime_message_with_boundary(msg, &generate_boundary())
}

/// Build the raw message with a caller-chosen boundary
pub fn build_mime_message_with_boundary(msg: &EmailMessage, boundary: &str) -> SmtpResult<Vec<u8>> {
    validate_boundary(boundary)?;

    let headers = message_headers(msg, boundary)?;
    let estimated = msg.html.len()
        + msg
            .attachments
            .iter()
            .map(|att| att.content.len() * 4 / 3 + 256)
            .sum::<usize>()
        + 1024;
    let mut out = String::with_capacity(estimated);

    for (name, value) in &headers {
        write_header(&mut out, name, value);
    }
    out.push_str("\r\n");

    write_delimiter(&mut out, boundary);
    write_header(&mut out, "Content-Type", "text/html; charset=UTF-8");
    write_header(&mut out, "Content-Transfer-Encoding", "quoted-printable");
    out.push_str("\r\n");
    out.push_str(&quoted_printable::encode_to_str(crlf_lines(&msg.html).as_bytes()));
    out.push_str("\r\n");

    for attachment in &msg.attachments {
        write_delimiter(&mut out, boundary);
        write_attachment(&mut out, attachment)?;
    }

    out.push_str("--");
    out.push_str(boundary);
    out.push_str("--\r\n");

    Ok(out.into_bytes())
}

/// Top-level headers in emission order, custom headers merged in
fn message_headers(msg: &EmailMessage, boundary: &str) -> SmtpResult<Vec<(String, String)>> {
    for address in std::iter::once(&msg.from).chain(&msg.to) {
        validate_header_value("address", address)?;
    }
    validate_header_value("Subject", &msg.subject)?;

    let mut headers = vec![
        (
            "From".to_string(),
            format_address(&msg.from, msg.name.as_deref())?,
        ),
        ("To".to_string(), msg.to.join(", ")),
        (
            "Subject".to_string(),
            encoded_value(header::Subject::from(msg.subject.clone())),
        ),
        ("MIME-Version".to_string(), "1.0".to_string()),
        (
            "Content-Type".to_string(),
            format!("multipart/mixed; boundary=\"{}\"", boundary),
        ),
    ];

    if let Some(reply_to) = msg.reply_to.as_deref().filter(|r| !r.is_empty()) {
        validate_header_value("Reply-To", reply_to)?;
        headers.push(("Reply-To".to_string(), reply_to.to_string()));
    }

    for (name, value) in msg.headers.iter() {
        validate_header_name(name)?;
        validate_header_value(name, value)?;

        if STRUCTURAL_HEADERS
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
        {
            return Err(SmtpError::InvalidHeader {
                name: name.to_string(),
                reason: "reserved for MIME structure".to_string(),
            });
        }

        match headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value.to_string(),
            None => headers.push((name.to_string(), value.to_string())),
        }
    }

    Ok(headers)
}

fn write_attachment(out: &mut String, att: &Attachment) -> SmtpResult<()> {
    validate_header_value("Content-Type", &att.content_type)?;
    validate_header_value("Content-Disposition", &att.filename)?;

    let filename = quote_parameter(&att.filename);
    write_header(
        out,
        "Content-Type",
        &format!("{}; name=\"{}\"", att.content_type, filename),
    );
    write_header(
        out,
        "Content-Disposition",
        &format!("attachment; filename=\"{}\"", filename),
    );
    write_header(out, "Content-Transfer-Encoding", "base64");
    out.push_str("\r\n");

    let encoded = base64::engine::general_purpose::STANDARD.encode(&att.content);
    for line in encoded.as_bytes().chunks(BASE64_LINE_LEN) {
        out.push_str(std::str::from_utf8(line).unwrap_or_default());
        out.push_str("\r\n");
    }
    Ok(())
}

fn write_header(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str(": ");
    out.push_str(value);
    out.push_str("\r\n");
}

fn write_delimiter(out: &mut String, boundary: &str) {
    out.push_str("--");
    out.push_str(boundary);
    out.push_str("\r\n");
}

/// `Name <address>` when a display name is set, the bare address otherwise
fn format_address(address: &str, name: Option<&str>) -> SmtpResult<String> {
    let email = address
        .parse::<Address>()
        .map_err(|e| SmtpError::InvalidAddress(format!("{}: {}", address, e)))?;
    let name = match name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => {
            validate_header_value("From", name)?;
            Some(name.to_string())
        }
        None => None,
    };
    Ok(encoded_value(header::From::from(lettre::message::Mailboxes::from(Mailbox::new(name, email)))))
}

/// Header value as lettre writes it: quoted or RFC 2047 encoded as needed,
/// folded so no line passes 76 characters
fn encoded_value<H: Header>(value: H) -> String {
    let mut rendered = header::Headers::new();
    rendered.set(value);
    let line = rendered.to_string();
    line.split_once(": ")
        .map_or("", |(_, value)| value)
        .trim_end_matches("\r\n")
        .to_string()
}

/// Every line break as CRLF, so quoted-printable keeps them as hard breaks
fn crlf_lines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}

/// Escape a quoted-string parameter value
fn quote_parameter(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// 30 random bytes as lowercase hex
fn generate_boundary() -> String {
    let bytes: [u8; 30] = rand::random();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// RFC 2046: 1 to 70 `bchars`, not ending in a space
fn validate_boundary(boundary: &str) -> SmtpResult<()> {
    let valid_char = |c: char| c.is_ascii_alphanumeric() || "'()+_,-./:=? ".contains(c);

    if boundary.is_empty()
        || boundary.len() > 70
        || boundary.ends_with(' ')
        || !boundary.chars().all(valid_char)
    {
        return Err(SmtpError::MessageBuildError(format!(
            "invalid multipart boundary {:?}",
            boundary
        )));
    }
    Ok(())
}
