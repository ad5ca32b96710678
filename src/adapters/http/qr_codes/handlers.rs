//! HTTP handlers for QR code endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{CreateQrCodeCommand, UpdateQrCodeStatusCommand};

use super::super::error::{parse_id, ApiError};
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{CreateQrCodeRequest, QrCodeResponse, UpdateQrCodeRequest};

/// POST /api/qr-codes
pub async fn create_qr_code(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreateQrCodeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let qr = state
        .qr_code_handler()
        .create(CreateQrCodeCommand {
            user,
            name: request.name,
            channel: request.channel,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(QrCodeResponse::new(qr, state.public_url())),
    ))
}

/// GET /api/qr-codes
pub async fn list_qr_codes(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let codes = state.qr_code_handler().list(&user).await?;
    let base = state.public_url();
    Ok(Json(
        codes
            .into_iter()
            .map(|qr| QrCodeResponse::new(qr, base))
            .collect::<Vec<_>>(),
    ))
}

/// GET /api/qr-codes/:id
pub async fn get_qr_code(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id("id", &id)?;
    let qr = state.qr_code_handler().get(&user, &id).await?;
    Ok(Json(QrCodeResponse::new(qr, state.public_url())))
}

/// PATCH /api/qr-codes/:id
pub async fn update_qr_code(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(request): Json<UpdateQrCodeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let qr = state
        .qr_code_handler()
        .update_status(UpdateQrCodeStatusCommand {
            user,
            qr_code_id: parse_id("id", &id)?,
            status: request.status,
        })
        .await?;
    Ok(Json(QrCodeResponse::new(qr, state.public_url())))
}
