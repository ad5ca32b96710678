//! HTTP adapter for the tenant dashboard.
//!
//! - `GET /api/dashboard` - Totals, conversion rate, recent leads and codes

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::dashboard_routes;
