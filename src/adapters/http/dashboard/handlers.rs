//! HTTP handler for the dashboard endpoint.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::DashboardResponse;

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let dashboard = state.dashboard_handler().handle(&user).await?;
    Ok(Json(DashboardResponse::new(dashboard, state.public_url())))
}
