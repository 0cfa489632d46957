use email_address::EmailAddress;
use url::Url;

use crate::errors::{ValidationError, ValidationIssue, ValidationResult};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Returns `true` if the provided string is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Returns `true` if the provided string parses as a URL with a scheme.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Checks registration form input: non-empty name, valid email, password of
/// at least [`MIN_PASSWORD_LENGTH`] characters, matching confirmation.
///
/// This is the presentation-layer contract; the core itself only enforces
/// email uniqueness.
pub fn validate_registration(name: &str, email: &str, password: &str, confirm: &str) -> ValidationResult<()> {
    let mut issues = Vec::new();
    if name.trim().is_empty() {
        issues.push(ValidationIssue::new("name", "name must not be empty"));
    }
    if !is_valid_email(email) {
        issues.push(ValidationIssue::new("email", "email address is not valid"));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        issues.push(ValidationIssue::new(
            "password",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    if password != confirm {
        issues.push(ValidationIssue::new("confirm", "passwords do not match"));
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(issues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("test@example.com"));
        assert!(!is_valid_email("invalid"));
    }

    #[test]
    fn url_validation() {
        assert!(is_valid_url("https://example.com"));
        assert!(!is_valid_url("not-a-url"));
    }

    #[test]
    fn registration_rules() {
        assert!(validate_registration("王五2", "wangwu2@example.com", "password123", "password123").is_ok());

        let err = validate_registration("", "bad", "123", "456").unwrap_err();
        let fields: Vec<&str> = err.issues.iter().map(|issue| issue.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "password", "confirm"]);
    }
}
