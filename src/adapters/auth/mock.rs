//! Mock authentication adapters for testing.
//!
//! `MockSessionValidator` implements both `SessionValidator` and
//! `TokenIssuer` with an in-memory token table, so HTTP tests can sign up,
//! log in and call authenticated routes without real signatures.
//!
//! # Example
//!
//! ```ignore
//! let validator = MockSessionValidator::new()
//!     .with_user("valid-token", AuthenticatedUser::new(UserId::new(), "owner@example.com"));
//!
//! let user = validator.validate("valid-token").await?;
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::{IssuedToken, PasswordResetClaim, SessionValidator, TokenIssuer};

/// Mock session validator and token issuer.
///
/// Tokens not in the table return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    sessions: RwLock<HashMap<String, AuthenticatedUser>>,
    resets: RwLock<HashMap<String, PasswordResetClaim>>,
    /// Optional error to return for all validations.
    force_error: RwLock<Option<AuthError>>,
    counter: AtomicU64,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid session token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Registers a new valid session token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.sessions.write().unwrap().insert(token.into(), user);
    }

    /// Returns the number of registered session tokens.
    pub fn token_count(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    fn next_token(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        if self.resets.read().unwrap().contains_key(token) {
            return Err(AuthError::WrongPurpose);
        }

        self.sessions
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

impl TokenIssuer for MockSessionValidator {
    fn issue_session(&self, user: &AuthenticatedUser) -> Result<IssuedToken, AuthError> {
        let token = self.next_token("session");
        self.add_token(token.clone(), user.clone());
        Ok(IssuedToken {
            token,
            expires_in_secs: 3600,
        })
    }

    fn issue_password_reset(&self, user: &AuthenticatedUser, password_stamp: &str) -> Result<IssuedToken, AuthError> {
        let token = self.next_token("reset");
        let claim = PasswordResetClaim {
            user: user.clone(),
            password_stamp: password_stamp.to_string(),
        };
        self.resets.write().unwrap().insert(token.clone(), claim);
        Ok(IssuedToken {
            token,
            expires_in_secs: 900,
        })
    }

    fn verify_password_reset(&self, token: &str) -> Result<PasswordResetClaim, AuthError> {
        if self.sessions.read().unwrap().contains_key(token) {
            return Err(AuthError::WrongPurpose);
        }
        self.resets
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
