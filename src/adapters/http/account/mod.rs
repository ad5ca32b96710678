//! HTTP adapter for accounts.
//!
//! - `POST /api/auth/signup` - Register and receive a session token
//! - `POST /api/auth/login` - Exchange credentials for a session token
//! - `POST /api/auth/forgot-password` - Email a reset link (always 202)
//! - `POST /api/auth/reset-password` - Set a new password with a reset token
//! - `GET /api/account` - Current user, company link and next route

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{account_routes, auth_routes};
