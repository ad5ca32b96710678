//! Public chatbot handlers: the chat turn and the page a QR code opens.

mod open_chatbot;
mod send_message;

pub use open_chatbot::{
    spawn_scan_recorder, ChatbotMeta, ChatbotPage, OpenChatbotHandler, OpenChatbotQuery,
};
pub use send_message::{
    ChatSettings, SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult,
};
