//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - OpenAI chat completions and a scripted mock
//! - `auth` - JWT sessions and Argon2 password hashing
//! - `http` - axum REST API
//! - `memory` - In-memory repositories for tests and local runs
//! - `notification` - Resend email and a logging fallback
//! - `postgres` - sqlx repositories

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod notification;
pub mod postgres;
