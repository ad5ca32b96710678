//! HTTP adapter for the public chatbot.
//!
//! - `POST /api/chat` - One chat turn against a company's chatbot
//! - `GET /api/c/:code` - Page data for the chat a QR code opens
//! - `GET /api/c/:code/meta` - Link-preview title and description

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{chat_routes, chatbot_routes};
