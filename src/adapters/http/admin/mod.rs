//! HTTP adapter for platform administration. Every route requires a
//! platform admin; others get 403.
//!
//! - `GET /api/admin/overview` - Platform totals and newest companies
//! - `GET /api/admin/companies` - All companies
//! - `PATCH /api/admin/companies/:id` - Suspend, reactivate or cancel a company
//! - `GET /api/admin/leads` - Most recent leads across tenants

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::admin_routes;
