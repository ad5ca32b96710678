//! HTTP handlers for account endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    ForgotPasswordCommand, ResetPasswordCommand, SignInCommand, SignUpCommand,
};

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{
    AccountResponse, ForgotPasswordRequest, ResetPasswordRequest, SessionResponse, SignInRequest,
    SignUpRequest,
};

/// POST /api/auth/signup
pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .sign_up_handler()
        .handle(SignUpCommand {
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
        })
        .await?;

    tracing::info!(user_id = %result.user.id, "Account created");
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::new(result.session, Some(result.next))),
    ))
}

/// POST /api/auth/login
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let token = state
        .sign_in_handler()
        .handle(SignInCommand {
            email: request.email,
            password: request.password,
        })
        .await?;
    Ok(Json(SessionResponse::new(token, None)))
}

/// POST /api/auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .forgot_password_handler()
        .handle(ForgotPasswordCommand { email: request.email })
        .await?;
    Ok(StatusCode::ACCEPTED)
}

/// POST /api/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .reset_password_handler()
        .handle(ResetPasswordCommand {
            token: request.token,
            password: request.password,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/account
pub async fn get_account(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let view = state.get_account_handler().handle(&user).await?;
    Ok(Json(AccountResponse::from(view)))
}
