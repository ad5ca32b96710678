//! Axum router configuration for lead endpoints.

use axum::routing::{get, patch};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{list_leads, update_lead};

/// Mounted at `/api/leads`.
pub fn lead_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leads))
        .route("/:id", patch(update_lead))
}
