//! Axum router configuration for catalog endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{get_industry, get_pricing, list_industries};

/// Mounted at `/api/industries`.
pub fn industry_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_industries))
        .route("/:slug", get(get_industry))
}

/// Mounted at `/api/pricing`.
pub fn pricing_routes() -> Router<AppState> {
    Router::new().route("/", get(get_pricing))
}
