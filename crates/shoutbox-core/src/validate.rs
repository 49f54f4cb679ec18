//! Syntactic address checks
//!
//! These only look for an "@". They are advisory: neither transport calls
//! them, the service is the authority on deliverability.

use crate::{CoreError, CoreResult};

/// Check that an address looks like an email address
pub fn validate_email(email: &str) -> CoreResult<()> {
    if !email.contains('@') {
        return Err(CoreError::InvalidAddress(email.to_string()));
    }
    Ok(())
}

/// Check every address in a list, stopping at the first bad one
pub fn validate_email_list<I, S>(emails: I) -> CoreResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for email in emails {
        validate_email(email.as_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());

        let err = validate_email("invalid-email").unwrap_err();
        assert_eq!(err.to_string(), "invalid email address: invalid-email");
    }

    #[test]
    fn test_validate_email_list() {
        assert!(validate_email_list(["a@b.com", "c@d.com"]).is_ok());
        assert!(validate_email_list(["a@b.com", "bad"]).is_err());

        // Empty list has no failing member
        assert!(validate_email_list(Vec::<String>::new()).is_ok());
    }

    #[test]
    fn test_list_reports_first_failure() {
        let err = validate_email_list(vec!["ok@x.io".to_string(), "first".into(), "second".into()])
            .unwrap_err();
        match err {
            CoreError::InvalidAddress(addr) => assert_eq!(addr, "first"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
