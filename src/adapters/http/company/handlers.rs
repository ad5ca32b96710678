//! HTTP handlers for company endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    OnboardCompanyCommand, ReplaceFaqsCommand, ReplaceServicesCommand, UpdateChatbotCommand,
};

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{
    CompanyProfileResponse, FaqResponse, OnboardingRequest, OnboardingResponse,
    ReplaceFaqsRequest, ReplaceServicesRequest, ServiceResponse, UpdateChatbotRequest,
};

/// POST /api/onboarding
pub async fn onboard_company(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<OnboardingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .onboard_company_handler()
        .handle(OnboardCompanyCommand {
            user,
            company_name: request.company_name,
            phone: request.phone,
            city: request.city,
            state: request.state,
            industry: request.industry,
        })
        .await?;

    tracing::info!(company_id = %result.company.id, "Company onboarded");
    Ok((
        StatusCode::CREATED,
        Json(OnboardingResponse {
            company: result.company.into(),
            next: result.next.to_string(),
        }),
    ))
}

/// GET /api/company
pub async fn get_company(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state.get_company_handler().handle(&user).await?;
    Ok(Json(CompanyProfileResponse::from(profile)))
}

/// PUT /api/company/chatbot
pub async fn update_chatbot(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<UpdateChatbotRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (branding, chatbot, lead_email) = request.into_parts();
    let profile = state
        .update_chatbot_handler()
        .handle(UpdateChatbotCommand {
            user,
            branding,
            chatbot,
            lead_email,
        })
        .await?;
    Ok(Json(CompanyProfileResponse::from(profile)))
}

/// PUT /api/company/services
pub async fn replace_services(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<ReplaceServicesRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let services = state
        .replace_services_handler()
        .handle(ReplaceServicesCommand {
            user,
            services: request.services,
        })
        .await?;
    Ok(Json(
        services.into_iter().map(ServiceResponse::from).collect::<Vec<_>>(),
    ))
}

/// PUT /api/company/faqs
pub async fn replace_faqs(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<ReplaceFaqsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let faqs = state
        .replace_faqs_handler()
        .handle(ReplaceFaqsCommand { user, faqs: request.faqs })
        .await?;
    Ok(Json(faqs.into_iter().map(FaqResponse::from).collect::<Vec<_>>()))
}
