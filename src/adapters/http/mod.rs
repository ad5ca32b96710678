//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with `dto`, `handlers` and `routes`.
//! `api_router` assembles them behind the auth middleware.

pub mod account;
pub mod admin;
pub mod catalog;
pub mod chat;
pub mod company;
pub mod dashboard;
pub mod error;
pub mod leads;
pub mod middleware;
pub mod qr_codes;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use router::api_router;
pub use state::AppState;
