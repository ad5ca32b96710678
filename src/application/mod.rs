//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers take `Arc<dyn Port>` dependencies so tests can wire the
//! in-memory store and mock AI provider in place of Postgres and OpenAI.

pub mod handlers;

pub use handlers::*;
