//! Error responses shared by every route module.

use std::str::FromStr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Wrapper that turns a `DomainError` into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

/// Parses an identifier from a path or body, reporting the field on failure.
pub fn parse_id<T: FromStr>(field: &str, value: &str) -> Result<T, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError(DomainError::validation(field, format!("Invalid {}", field))))
}

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound
        | ErrorCode::CompanyNotFound
        | ErrorCode::QrCodeNotFound
        | ErrorCode::LeadNotFound
        | ErrorCode::IndustryNotFound
        | ErrorCode::UserNotFound => StatusCode::NOT_FOUND,
        ErrorCode::EmailTaken | ErrorCode::CompanyExists | ErrorCode::InvalidStateTransition => {
            StatusCode::CONFLICT
        }
        ErrorCode::Unauthorized | ErrorCode::InvalidCredentials => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::AIProviderError => StatusCode::BAD_GATEWAY,
        ErrorCode::NotificationFailed | ErrorCode::DatabaseError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.code);

        let body = if err.is_internal() {
            tracing::error!(code = %err.code, message = %err.message, "Request failed");
            ErrorBody::new("INTERNAL_ERROR", "Something went wrong")
        } else {
            if status.is_server_error() {
                tracing::warn!(code = %err.code, message = %err.message, "Upstream failure");
            }
            ErrorBody::new(err.code.to_string(), err.message)
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> ErrorBody {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_keeps_code_and_message() {
        let response = ApiError(DomainError::new(ErrorCode::QrCodeNotFound, "QR code not found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(response).await,
            ErrorBody::new("QR_CODE_NOT_FOUND", "QR code not found")
        );
    }

    #[tokio::test]
    async fn database_errors_are_masked() {
        let response = ApiError(DomainError::database("relation \"leads\" does not exist")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body.code, "INTERNAL_ERROR");
        assert!(!body.message.contains("leads"));
    }

    #[test]
    fn parse_id_reports_field() {
        use crate::domain::foundation::LeadId;

        assert!(parse_id::<LeadId>("lead_id", &LeadId::new().to_string()).is_ok());
        let ApiError(err) = parse_id::<LeadId>("lead_id", "not-a-uuid").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"lead_id".to_string()));
    }

    #[test]
    fn status_mapping() {
        assert_eq!(status_for(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::EmailTaken), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorCode::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorCode::AIProviderError), StatusCode::BAD_GATEWAY);
    }
}
