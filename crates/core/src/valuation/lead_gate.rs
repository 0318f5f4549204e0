//! Lead-capture gate that must pass before a valuation is revealed.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

lazy_static! {
    /// `local@domain.tld`: one `@`, a dot after it, no whitespace anywhere.
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern");
}

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";

/// Contact details typed into the gate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
}

impl LeadSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Simple structural email check shared with the contact form.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validates the gate. The name must be non-blank; the email must be
/// non-blank and match `local@domain.tld` exactly as typed.
pub fn validate_lead(lead: &LeadSubmission) -> Result<(), ValidationError> {
    if lead.name.trim().is_empty() {
        return Err(ValidationError::MissingField(NAME_FIELD.to_string()));
    }
    if lead.email.trim().is_empty() {
        return Err(ValidationError::MissingField(EMAIL_FIELD.to_string()));
    }
    if !is_valid_email(&lead.email) {
        return Err(ValidationError::InvalidEmail(EMAIL_FIELD.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_lead() {
        assert!(validate_lead(&LeadSubmission::new("Jordan", "jordan@example.com")).is_ok());
        assert!(validate_lead(&LeadSubmission::new("  J  ", "j@mail.example.co.uk")).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = validate_lead(&LeadSubmission::new("   ", "a@b.co")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("name".to_string()));
    }

    #[test]
    fn test_blank_email_rejected() {
        let err = validate_lead(&LeadSubmission::new("Sam", "  ")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("email".to_string()));
    }

    #[test]
    fn test_malformed_emails_rejected() {
        for email in [
            "plainaddress",
            "no-dot@domain",
            "two@@example.com",
            "a@b@c.com",
            "space in@example.com",
            " leading@example.com",
            "@example.com",
            "user@.",
        ] {
            let result = validate_lead(&LeadSubmission::new("Sam", email));
            assert_eq!(
                result,
                Err(ValidationError::InvalidEmail("email".to_string())),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("x@y.z"));
        assert!(!is_valid_email("x@y"));
        assert!(!is_valid_email(""));
    }
}
