//! Authentication configuration (HS256 session tokens)

use serde::Deserialize;

use super::error::ValidationError;

const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for signing tokens
    pub jwt_secret: String,

    #[serde(default = "default_issuer")]
    pub issuer: String,

    #[serde(default = "default_audience")]
    pub audience: String,

    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Password reset link lifetime in seconds
    #[serde(default = "default_reset_ttl")]
    pub reset_ttl_secs: u64,
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if self.session_ttl_secs == 0 || self.reset_ttl_secs == 0 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            issuer: default_issuer(),
            audience: default_audience(),
            session_ttl_secs: default_session_ttl(),
            reset_ttl_secs: default_reset_ttl(),
        }
    }
}

fn default_issuer() -> String {
    "tapzilla".to_string()
}

fn default_audience() -> String {
    "tapzilla-app".to_string()
}

fn default_session_ttl() -> u64 {
    7 * 24 * 60 * 60
}

fn default_reset_ttl() -> u64 {
    60 * 60
}
