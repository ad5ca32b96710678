//! Axum router configuration for chatbot endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{chatbot_meta, open_chatbot, send_chat_message};

/// Mounted at `/api/chat`.
pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/", post(send_chat_message))
}

/// Mounted at `/api/c`.
pub fn chatbot_routes() -> Router<AppState> {
    Router::new()
        .route("/:code", get(open_chatbot))
        .route("/:code/meta", get(chatbot_meta))
}
