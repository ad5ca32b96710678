//! HTTP adapter for QR/NFC codes.
//!
//! - `POST /api/qr-codes` - Create a code for a channel
//! - `GET /api/qr-codes` - Caller's codes, newest first
//! - `GET /api/qr-codes/:id` - One code
//! - `PATCH /api/qr-codes/:id` - Pause or reactivate a code

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::qr_code_routes;
