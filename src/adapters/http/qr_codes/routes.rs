//! Axum router configuration for QR code endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{create_qr_code, get_qr_code, list_qr_codes, update_qr_code};

/// Mounted at `/api/qr-codes`.
pub fn qr_code_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_qr_codes).post(create_qr_code))
        .route("/:id", get(get_qr_code).patch(update_qr_code))
}
