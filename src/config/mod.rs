//! Application configuration module
//!
//! Configuration is read from environment variables with the `TAPZILLA`
//! prefix; nested values use a double underscore. A `.env` file is loaded
//! first when present.
//!
//! # Example
//!
//! ```no_run
//! use tapzilla::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod auth;
mod database;
mod email;
mod error;
mod server;

pub use ai::AiConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, environment, public URL)
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection
    pub database: DatabaseConfig,

    /// Session token signing
    pub auth: AuthConfig,

    /// OpenAI chat completions
    #[serde(default)]
    pub ai: AiConfig,

    /// Outbound email (Resend)
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `TAPZILLA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TAPZILLA__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TAPZILLA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.ai.validate()?;
        self.email.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[(&str, &str)] = &[
        ("TAPZILLA__DATABASE__URL", "postgresql://tapzilla@localhost/tapzilla"),
        ("TAPZILLA__AUTH__JWT_SECRET", "0123456789abcdef0123456789abcdef"),
        ("TAPZILLA__AI__OPENAI_API_KEY", "sk-test"),
    ];

    fn with_env<T>(extra: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_MUTEX.lock().unwrap();
        for (k, v) in VARS.iter().chain(extra) {
            env::set_var(k, v);
        }
        let result = f();
        for (k, _) in VARS.iter().chain(extra) {
            env::remove_var(k);
        }
        result
    }

    #[test]
    fn loads_minimal_environment() {
        let config = with_env(&[], AppConfig::load).unwrap();
        assert_eq!(config.database.url, "postgresql://tapzilla@localhost/tapzilla");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert!(config.email.api_key().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_overrides() {
        let config = with_env(
            &[
                ("TAPZILLA__SERVER__PORT", "3001"),
                ("TAPZILLA__SERVER__ENVIRONMENT", "production"),
                ("TAPZILLA__SERVER__PUBLIC_URL", "https://tapzilla.com"),
            ],
            AppConfig::load,
        )
        .unwrap();
        assert_eq!(config.server.port, 3001);
        assert!(config.is_production());
        assert_eq!(config.server.public_url(), "https://tapzilla.com");
    }

    #[test]
    fn missing_secret_fails_validation() {
        let config = with_env(&[("TAPZILLA__AUTH__JWT_SECRET", "short")], AppConfig::load).unwrap();
        assert_eq!(config.validate(), Err(ValidationError::JwtSecretTooShort));
    }
}
