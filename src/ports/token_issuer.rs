//! Token issuing port for sessions and password resets.

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// A signed token and its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in_secs: u64,
}

/// What a valid reset token proves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetClaim {
    pub user: AuthenticatedUser,
    /// The user's password stamp when the token was issued.
    pub password_stamp: String,
}

/// Mints signed tokens for a user.
///
/// Session tokens are checked by [`super::SessionValidator`]; reset tokens
/// are only accepted by [`TokenIssuer::verify_password_reset`].
pub trait TokenIssuer: Send + Sync {
    /// Issues a session token.
    fn issue_session(&self, user: &AuthenticatedUser) -> Result<IssuedToken, AuthError>;

    /// Issues a short-lived password reset token bound to the user's
    /// current password stamp.
    fn issue_password_reset(&self, user: &AuthenticatedUser, password_stamp: &str) -> Result<IssuedToken, AuthError>;

    /// Checks a reset token's signature, purpose and expiry. The caller
    /// compares the returned stamp with the stored one.
    fn verify_password_reset(&self, token: &str) -> Result<PasswordResetClaim, AuthError>;
}
