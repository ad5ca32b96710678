use sha2::{Digest, Sha256};

use crate::domain::foundation::{Timestamp, UserId};

/// Where the client goes after sign-in when it has no company yet.
pub const ONBOARDING_PATH: &str = "/onboarding";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// A registered account. `password_hash` is a PHC string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

impl User {
    pub fn new(email: String, password_hash: String, now: Timestamp) -> Self {
        Self {
            id: UserId::new(),
            email,
            password_hash,
            created_at: now,
        }
    }

    /// Short digest of the stored password hash. It changes with every
    /// password change, which is what retires outstanding reset links.
    pub fn password_stamp(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.password_hash.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        digest[..16].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_stamp_follows_the_hash() {
        let mut user = User::new("a@example.com".into(), "$argon2id$v=19$old".into(), Timestamp::now());
        let before = user.password_stamp();
        assert_eq!(before.len(), 16);
        assert_eq!(before, user.password_stamp());
        assert!(!before.contains("argon2"));

        user.password_hash = "$argon2id$v=19$new".into();
        assert_ne!(user.password_stamp(), before);
    }
}
