//! SignInHandler - Email/password login.

use std::sync::Arc;

use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode};
use crate::ports::{IssuedToken, PasswordHasher, TokenIssuer, UserRepository};

#[derive(Debug, Clone)]
pub struct SignInCommand {
    pub email: String,
    pub password: String,
}

pub struct SignInHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl SignInHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self { users, hasher, tokens }
    }

    /// Never says whether the email or the password was wrong.
    pub async fn handle(&self, cmd: SignInCommand) -> Result<IssuedToken, DomainError> {
        let email = cmd.email.trim().to_lowercase();
        let user = self.users.find_by_email(&email).await?;

        match user {
            Some(user) if self.hasher.verify(&cmd.password, &user.password_hash) => {
                tracing::info!(user_id = %user.id, "Signed in");
                Ok(self
                    .tokens
                    .issue_session(&AuthenticatedUser::new(user.id, user.email))?)
            }
            _ => Err(DomainError::new(
                ErrorCode::InvalidCredentials,
                "Invalid email or password",
            )),
        }
    }
}
