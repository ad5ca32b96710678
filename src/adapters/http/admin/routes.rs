//! Axum router configuration for admin endpoints.

use axum::routing::{get, patch};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{get_overview, list_companies, list_recent_leads, update_company_status};

/// Mounted at `/api/admin`.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/companies", get(list_companies))
        .route("/companies/:id", patch(update_company_status))
        .route("/leads", get(list_recent_leads))
}
