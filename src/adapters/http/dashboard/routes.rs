//! HTTP routes for the dashboard endpoint.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::get_dashboard;

/// Mounted at `/api/dashboard`.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}
