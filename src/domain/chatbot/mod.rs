//! Chatbot module - Prompting, lead detection and conversation records.
//!
//! Everything here is pure: the chat handler feeds these functions the
//! company configuration and transcript and persists whatever they return.

mod conversation;
mod lead_capture;
mod lead_extraction;
mod message;
mod prompt;

pub use conversation::{Conversation, ConversationStatus};
pub use lead_capture::{detect_lead_capture, LeadCaptureOutcome, LEAD_CAPTURED_MARKER};
pub use lead_extraction::{extract_lead_details, LeadDetails};
pub use message::{validate_transcript, ChatMessage, ChatRole, MAX_MESSAGES};
pub use prompt::build_system_prompt;
