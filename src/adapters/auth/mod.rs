//! Authentication adapters.
//!
//! Implementations of the `SessionValidator`, `TokenIssuer` and
//! `PasswordHasher` ports:
//!
//! - `jwt` - HS256 session and password-reset tokens
//! - `password` - Argon2 password hashing
//! - `mock` - Test implementations with an in-memory token table

mod jwt;
mod mock;
mod password;

pub use jwt::{JwtConfig, JwtTokenService};
pub use mock::MockSessionValidator;
pub use password::Argon2PasswordHasher;
