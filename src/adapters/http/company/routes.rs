//! Axum router configuration for company endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{get_company, onboard_company, replace_faqs, replace_services, update_chatbot};

/// Mounted at `/api/onboarding`.
pub fn onboarding_routes() -> Router<AppState> {
    Router::new().route("/", post(onboard_company))
}

/// Mounted at `/api/company`.
pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_company))
        .route("/chatbot", put(update_chatbot))
        .route("/services", put(replace_services))
        .route("/faqs", put(replace_faqs))
}
