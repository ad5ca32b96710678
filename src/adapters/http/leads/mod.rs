//! HTTP adapter for the lead inbox.
//!
//! - `GET /api/leads` - Caller's leads, newest first
//! - `PATCH /api/leads/:id` - Move a lead through the pipeline

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::lead_routes;
