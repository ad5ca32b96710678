//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user extracted from a session
//! token. They have **no external dependencies**; the `SessionValidator`
//! port populates them.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier.
    pub id: UserId,

    /// User's email address from the token claims.
    pub email: String,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// Token was issued for another purpose (e.g. a reset token used as a session).
    #[error("Token not valid for this purpose")]
    WrongPurpose,

    /// Token could not be produced.
    #[error("Token issuance failed: {0}")]
    IssueFailed(String),
}

impl AuthError {
    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::WrongPurpose
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_new_creates_user() {
        let id = UserId::new();
        let user = AuthenticatedUser::new(id, "owner@example.com");
        assert_eq!(user.id, id);
        assert_eq!(user.email, "owner@example.com");
    }

    #[test]
    fn reauthentication_classification() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(AuthError::WrongPurpose.requires_reauthentication());
        assert!(!AuthError::IssueFailed("x".into()).requires_reauthentication());
    }

    #[test]
    fn auth_error_display() {
        assert_eq!(AuthError::TokenExpired.to_string(), "Token expired");
    }
}
