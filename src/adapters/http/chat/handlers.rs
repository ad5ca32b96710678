//! HTTP handlers for chatbot endpoints.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::application::handlers::{OpenChatbotQuery, SendChatMessageCommand};

use super::super::error::{parse_id, ApiError};
use super::super::state::AppState;
use super::dto::{ChatRequest, ChatResponse, ChatbotMetaResponse, ChatbotPageResponse};

/// POST /api/chat
pub async fn send_chat_message(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SendChatMessageCommand {
        company_id: parse_id("company_id", &request.company_id)?,
        qr_code_id: request
            .qr_code_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| parse_id("qr_code_id", id))
            .transpose()?,
        session_id: parse_id("session_id", &request.session_id)?,
        messages: request.messages,
    };

    let result = state.send_chat_message_handler().handle(cmd).await?;
    Ok(Json(ChatResponse::from(result)))
}

/// GET /api/c/:code
pub async fn open_chatbot(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state.open_chatbot_handler().handle(OpenChatbotQuery { code }).await?;
    Ok(Json(ChatbotPageResponse::from(page)))
}

/// GET /api/c/:code/meta
pub async fn chatbot_meta(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let meta = state.open_chatbot_handler().meta(OpenChatbotQuery { code }).await?;
    Ok(Json(ChatbotMetaResponse::from(meta)))
}
