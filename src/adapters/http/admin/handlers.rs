//! HTTP handlers for admin endpoints.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::application::handlers::UpdateCompanyStatusCommand;

use super::super::company::dto::CompanyResponse;
use super::super::error::{parse_id, ApiError};
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::UpdateCompanyStatusRequest;

/// GET /api/admin/overview
pub async fn get_overview(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.admin_handler().overview(&admin).await?))
}

/// GET /api/admin/companies
pub async fn list_companies(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.admin_handler().companies(&admin).await?))
}

/// PATCH /api/admin/companies/:id
pub async fn update_company_status(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<UpdateCompanyStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let company = state
        .admin_handler()
        .update_company_status(UpdateCompanyStatusCommand {
            admin,
            company_id: parse_id("id", &id)?,
            status: request.status,
        })
        .await?;

    tracing::info!(company_id = %company.id, status = company.status.as_str(), "Company status changed");
    Ok(Json(CompanyResponse::from(company)))
}

/// GET /api/admin/leads
pub async fn list_recent_leads(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.admin_handler().recent_leads(&admin).await?))
}
