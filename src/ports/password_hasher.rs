//! Password hashing port.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(pub String);

/// One-way password hashing.
///
/// Hashes are self-describing strings (algorithm, parameters and salt).
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Returns false for a mismatch or an unparseable hash.
    fn verify(&self, password: &str, hash: &str) -> bool;
}
