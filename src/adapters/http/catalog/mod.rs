//! HTTP adapter for marketing data.
//!
//! - `GET /api/industries` - Industries with per-lead prices
//! - `GET /api/industries/:slug` - One industry page
//! - `GET /api/pricing` - Tiers, add-ons and setup fee

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{industry_routes, pricing_routes};
