//! Forgot-password and reset-password handlers.

use std::sync::Arc;

use crate::domain::account::validate_new_password;
use crate::domain::foundation::{AuthError, AuthenticatedUser, DomainError, ErrorCode};
use crate::ports::{Notifier, PasswordHasher, TokenIssuer, UserRepository};

#[derive(Debug, Clone)]
pub struct ForgotPasswordCommand {
    pub email: String,
}

/// Emails a reset link when the account exists. Always succeeds so the
/// endpoint cannot be used to probe for accounts.
pub struct ForgotPasswordHandler {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenIssuer>,
    notifier: Arc<dyn Notifier>,
    public_url: String,
}

impl ForgotPasswordHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenIssuer>,
        notifier: Arc<dyn Notifier>,
        public_url: impl Into<String>,
    ) -> Self {
        Self {
            users,
            tokens,
            notifier,
            public_url: public_url.into(),
        }
    }

    pub async fn handle(&self, cmd: ForgotPasswordCommand) -> Result<(), DomainError> {
        let email = cmd.email.trim().to_lowercase();
        let Some(user) = self.users.find_by_email(&email).await? else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = self.tokens.issue_password_reset(
            &AuthenticatedUser::new(user.id, user.email.clone()),
            &user.password_stamp(),
        )?;
        let link = format!(
            "{}/auth/reset-password?token={}",
            self.public_url.trim_end_matches('/'),
            token.token
        );

        if let Err(e) = self.notifier.send_password_reset(&user.email, &link).await {
            tracing::warn!(user_id = %user.id, error = %e, "Password reset email failed");
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    pub token: String,
    pub password: String,
}

pub struct ResetPasswordHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl ResetPasswordHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self { users, hasher, tokens }
    }

    pub async fn handle(&self, cmd: ResetPasswordCommand) -> Result<(), DomainError> {
        let claim = self.tokens.verify_password_reset(&cmd.token)?;
        // A token only works while the password it was issued against is
        // still current, so each link resets at most once.
        let user = self
            .users
            .find_by_id(&claim.user.id)
            .await?
            .filter(|u| u.password_stamp() == claim.password_stamp)
            .ok_or_else(|| {
                tracing::debug!(user_id = %claim.user.id, "Stale password reset token");
                DomainError::from(AuthError::InvalidToken)
            })?;
        validate_new_password(&cmd.password, None)?;

        let password_hash = self
            .hasher
            .hash(&cmd.password)
            .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;
        self.users.update_password(&user.id, &password_hash).await?;

        tracing::info!(user_id = %user.id, "Password reset");
        Ok(())
    }
}
