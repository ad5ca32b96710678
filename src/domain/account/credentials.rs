//! Rules applied to emails and passwords at sign-up and reset.

use crate::domain::foundation::ValidationError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Normalizes an email address. Only a loose shape check is applied.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email.to_lowercase()),
        _ => Err(ValidationError::invalid_format("email", "Invalid email address")),
    }
}

/// Checks a chosen password and, when given, its confirmation.
pub fn validate_new_password(password: &str, confirmation: Option<&str>) -> Result<(), ValidationError> {
    if let Some(confirmation) = confirmation {
        if password != confirmation {
            return Err(ValidationError::invalid_format("confirm_password", "Passwords don't match"));
        }
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::invalid_format(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_lowercased() {
        assert_eq!(validate_email(" Owner@Example.com ").unwrap(), "owner@example.com");
    }

    #[test]
    fn email_needs_at_sign() {
        assert!(validate_email("owner.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert_eq!(validate_email("").unwrap_err(), ValidationError::empty_field("email"));
    }

    #[test]
    fn mismatch_reported_before_length() {
        let err = validate_new_password("abc", Some("abd")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::invalid_format("confirm_password", "Passwords don't match")
        );
    }

    #[test]
    fn short_password_rejected() {
        let err = validate_new_password("abc12", Some("abc12")).unwrap_err();
        assert_eq!(err.field(), "password");
        assert!(validate_new_password("abc123", None).is_ok());
    }
}
