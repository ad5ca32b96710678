//! Chat transcript entries exchanged between a visitor and the chatbot.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Upper bound on transcript length accepted per request.
pub const MAX_MESSAGES: usize = 50;

/// Role of a transcript entry.
///
/// Only visitor and assistant turns are stored; the system prompt is rebuilt
/// on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Checks a transcript submitted by the chat widget.
///
/// The transcript must hold between one and [`MAX_MESSAGES`] entries, none
/// blank, and end with a visitor turn.
pub fn validate_transcript(messages: &[ChatMessage]) -> Result<(), ValidationError> {
    if messages.is_empty() {
        return Err(ValidationError::empty_field("messages"));
    }
    if messages.len() > MAX_MESSAGES {
        return Err(ValidationError::out_of_range(
            "messages",
            1,
            MAX_MESSAGES as i64,
            messages.len() as i64,
        ));
    }
    if messages.iter().any(|m| m.content.trim().is_empty()) {
        return Err(ValidationError::empty_field("messages.content"));
    }
    if messages.last().map(|m| m.role) != Some(ChatRole::User) {
        return Err(ValidationError::invalid_format(
            "messages",
            "last message must be from the user",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_transcript() {
        let messages = vec![
            ChatMessage::assistant("What service do you need?"),
            ChatMessage::user("Carpet cleaning"),
        ];
        assert!(validate_transcript(&messages).is_ok());
    }

    #[test]
    fn rejects_empty_transcript() {
        assert_eq!(
            validate_transcript(&[]).unwrap_err(),
            ValidationError::empty_field("messages")
        );
    }

    #[test]
    fn rejects_trailing_assistant_turn() {
        let messages = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];
        assert!(validate_transcript(&messages).is_err());
    }

    #[test]
    fn rejects_blank_content() {
        let messages = vec![ChatMessage::user("   ")];
        assert_eq!(validate_transcript(&messages).unwrap_err().field(), "messages.content");
    }

    #[test]
    fn rejects_oversized_transcript() {
        let messages: Vec<_> = (0..=MAX_MESSAGES).map(|i| ChatMessage::user(format!("m{i}"))).collect();
        assert!(matches!(
            validate_transcript(&messages),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }
}
