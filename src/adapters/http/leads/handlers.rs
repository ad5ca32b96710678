//! HTTP handlers for lead endpoints.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::application::handlers::UpdateLeadStatusCommand;

use super::super::error::{parse_id, ApiError};
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{LeadResponse, UpdateLeadRequest};

/// GET /api/leads
pub async fn list_leads(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let leads = state.lead_handler().list(&user).await?;
    Ok(Json(leads))
}

/// PATCH /api/leads/:id
pub async fn update_lead(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<UpdateLeadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let lead = state
        .lead_handler()
        .update_status(UpdateLeadStatusCommand {
            user,
            lead_id: parse_id("id", &id)?,
            status: request.status,
        })
        .await?;
    Ok(Json(LeadResponse::from(lead)))
}
