//! User repository port.

use async_trait::async_trait;

use crate::domain::account::User;
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user.
    ///
    /// # Errors
    ///
    /// - `EmailTaken` if the email is already registered
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Lookup by normalized (lowercase) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), DomainError>;
}
