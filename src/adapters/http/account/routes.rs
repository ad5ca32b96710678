//! Axum router configuration for account endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{forgot_password, get_account, reset_password, sign_in, sign_up};

/// Mounted at `/api/auth`. No authentication required.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/login", post(sign_in))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password))
}

/// Mounted at `/api/account`.
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/", get(get_account))
}
