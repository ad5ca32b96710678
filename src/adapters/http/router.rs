//! Assembles every route module into the API router.

use axum::routing::get;
use axum::{middleware, Json, Router};
use serde_json::json;

use super::account::{account_routes, auth_routes};
use super::admin::admin_routes;
use super::catalog::{industry_routes, pricing_routes};
use super::chat::{chat_routes, chatbot_routes};
use super::company::{company_routes, onboarding_routes};
use super::dashboard::dashboard_routes;
use super::leads::lead_routes;
use super::middleware::auth_middleware;
use super::qr_codes::qr_code_routes;
use super::state::AppState;

/// Builds the `/api` router with auth applied.
///
/// Cross-cutting layers (tracing, CORS, timeouts, compression) are added by
/// the binary so tests can drive this router directly.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/chat", chat_routes())
        .nest("/c", chatbot_routes())
        .nest("/auth", auth_routes())
        .nest("/account", account_routes())
        .nest("/onboarding", onboarding_routes())
        .nest("/company", company_routes())
        .nest("/qr-codes", qr_code_routes())
        .nest("/leads", lead_routes())
        .nest("/dashboard", dashboard_routes())
        .nest("/admin", admin_routes())
        .nest("/industries", industry_routes())
        .nest("/pricing", pricing_routes())
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .nest("/api", api)
        .with_state(state)
}
