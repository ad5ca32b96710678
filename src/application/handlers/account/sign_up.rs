//! SignUpHandler - Creates an account and signs it in.

use std::sync::Arc;

use crate::domain::account::{validate_email, validate_new_password, User, ONBOARDING_PATH};
use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode, Timestamp};
use crate::ports::{IssuedToken, PasswordHasher, TokenIssuer, UserRepository};

#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone)]
pub struct SignUpResult {
    pub user: User,
    pub session: IssuedToken,
    /// Where the client goes next.
    pub next: &'static str,
}

pub struct SignUpHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl SignUpHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self { users, hasher, tokens }
    }

    pub async fn handle(&self, cmd: SignUpCommand) -> Result<SignUpResult, DomainError> {
        validate_new_password(&cmd.password, Some(&cmd.confirm_password))?;
        let email = validate_email(&cmd.email)?;

        let password_hash = self
            .hasher
            .hash(&cmd.password)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;

        let user = User::new(email, password_hash, Timestamp::now());
        self.users.create(&user).await?;
        tracing::info!(user_id = %user.id, "Account created");

        let session = self
            .tokens
            .issue_session(&AuthenticatedUser::new(user.id, user.email.clone()))?;

        Ok(SignUpResult {
            user,
            session,
            next: ONBOARDING_PATH,
        })
    }
}
