//! HTTP handlers for catalog endpoints. The catalog is static, so none of
//! these touch a port.

use axum::extract::{Json, Path, Query};
use axum::response::IntoResponse;

use crate::domain::catalog::{find_industry, listed_industries, INDUSTRIES};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::super::error::ApiError;
use super::dto::{IndustryListQuery, IndustryResponse, IndustrySummaryResponse, PricingResponse};

/// GET /api/industries
pub async fn list_industries(Query(query): Query<IndustryListQuery>) -> impl IntoResponse {
    let industries: Vec<IndustrySummaryResponse> = if query.all {
        INDUSTRIES.iter().map(Into::into).collect()
    } else {
        listed_industries().map(Into::into).collect()
    };
    Json(industries)
}

/// GET /api/industries/:slug
pub async fn get_industry(Path(slug): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let industry = find_industry(&slug)
        .filter(|i| i.listed)
        .ok_or_else(|| DomainError::new(ErrorCode::IndustryNotFound, "Industry not found"))?;
    Ok(Json(IndustryResponse::from(industry)))
}

/// GET /api/pricing
pub async fn get_pricing() -> impl IntoResponse {
    Json(PricingResponse::current())
}
