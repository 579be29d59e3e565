//! Input validation helpers
//!
//! Centralized text length limits plus the bridge from `validator` derive
//! output to [`AppError::Validation`]. A failed validation reports every
//! offending field, not just the first.

use validator::Validate;

use crate::utils::{AppError, FieldIssue};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menu item, blog title, customer name, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, special requests, enquiry bodies, admin messages
pub const MAX_TEXT_LEN: usize = 2000;

/// Short identifiers: phone numbers, categories, tags, dates, times
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Run derive-based validation and convert the result into one
/// [`AppError::Validation`] carrying all field issues.
pub fn validate_request<T: Validate>(payload: &T) -> Result<(), AppError> {
    match payload.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let mut issues: Vec<FieldIssue> = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errs)| {
                    errs.iter().map(move |e| {
                        let message = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("invalid value ({})", e.code));
                        FieldIssue::new(field.to_string(), message)
                    })
                })
                .collect();
            issues.sort_by(|a, b| a.field.cmp(&b.field));
            Err(AppError::Validation(issues))
        }
    }
}

/// Check a required string in handler code that builds issue lists by hand.
pub fn require_text(
    issues: &mut Vec<FieldIssue>,
    value: &str,
    field: &str,
    max_len: usize,
) {
    if value.trim().is_empty() {
        issues.push(FieldIssue::new(field, "must not be empty"));
    } else if value.len() > max_len {
        issues.push(FieldIssue::new(
            field,
            format!("too long ({} chars, max {max_len})", value.len()),
        ));
    }
}

/// Syntactic email check shared by the hand-rolled validators.
pub fn is_valid_email(value: &str) -> bool {
    use validator::ValidateEmail;
    value.validate_email()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(email(message = "must be a valid email address"))]
        email: String,
    }

    #[test]
    fn collects_every_offending_field() {
        let probe = Probe {
            name: String::new(),
            email: "not-an-email".into(),
        };
        let err = validate_request(&probe).unwrap_err();
        match err {
            AppError::Validation(issues) => {
                let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
                assert_eq!(fields, vec!["email", "name"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_payload_passes() {
        let probe = Probe {
            name: "Asha".into(),
            email: "asha@example.com".into(),
        };
        assert!(validate_request(&probe).is_ok());
    }

    #[test]
    fn email_probe() {
        assert!(is_valid_email("guest@savannah.example"));
        assert!(!is_valid_email("guest@"));
        assert!(!is_valid_email("plainstring"));
    }
}
