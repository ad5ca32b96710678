//! Session validation port for bearer token validation.
//!
//! This port defines the contract for validating session tokens and
//! extracting user identity. The JWT adapter implements it for production;
//! tests use the mock validator.
//!
//! All implementations MUST validate:
//! - **Issuer (iss)**: Token must come from this service
//! - **Audience (aud)**: Token must be intended for this application
//! - **Expiry (exp)**: Token must not be expired
//! - **Purpose**: Password-reset tokens are never accepted as sessions

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates session tokens and extracts user identity.
///
/// HTTP middleware uses this to validate Bearer tokens.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature
/// - Validate issuer, audience, and expiry claims
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::WrongPurpose` for tokens minted for another use
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a session token and return the authenticated user.
    ///
    /// `token` is the raw token without the "Bearer " prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::collections::HashMap;
    use std::sync::RwLock;

    struct TestSessionValidator {
        tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    }

    #[async_trait]
    impl SessionValidator for TestSessionValidator {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            self.tokens
                .read()
                .unwrap()
                .get(token)
                .cloned()
                .ok_or(AuthError::InvalidToken)
        }
    }

    #[tokio::test]
    async fn session_validator_returns_user_for_known_token() {
        let user = AuthenticatedUser::new(UserId::new(), "owner@example.com");
        let validator = TestSessionValidator {
            tokens: RwLock::new(HashMap::from([("valid".to_string(), user.clone())])),
        };

        assert_eq!(validator.validate("valid").await.unwrap(), user);
        assert!(matches!(validator.validate("nope").await, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn session_validator_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionValidator>();
    }
}
