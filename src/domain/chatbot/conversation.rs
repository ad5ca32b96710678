//! Persisted chat session between a visitor and a company's chatbot.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ChatSessionId, CompanyId, ConversationId, QrCodeId, StateMachine, Timestamp,
};

use super::message::ChatMessage;

/// Lifecycle of a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    #[default]
    Active,
    /// A lead was captured. No further status changes.
    Completed,
}

impl ConversationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationStatus::Active => "active",
            ConversationStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ConversationStatus::Active),
            "completed" => Some(ConversationStatus::Completed),
            _ => None,
        }
    }
}

impl StateMachine for ConversationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationStatus::*;
        matches!((self, target), (Active, Active) | (Active, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationStatus::*;
        match self {
            Active => vec![Active, Completed],
            Completed => vec![],
        }
    }
}

/// One row per chat session, keyed by the widget's session id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: ConversationId,
    pub company_id: CompanyId,
    pub qr_code_id: Option<QrCodeId>,
    pub session_id: ChatSessionId,
    pub messages: Vec<ChatMessage>,
    pub status: ConversationStatus,
    pub lead_captured: bool,
    pub last_message_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

impl Conversation {
    /// Starts a conversation for a session the store has not seen yet.
    pub fn start(
        company_id: CompanyId,
        qr_code_id: Option<QrCodeId>,
        session_id: ChatSessionId,
        now: Timestamp,
    ) -> Self {
        Self {
            id: ConversationId::new(),
            company_id,
            qr_code_id,
            session_id,
            messages: Vec::new(),
            status: ConversationStatus::Active,
            lead_captured: false,
            last_message_at: now,
            completed_at: None,
        }
    }

    /// Records an exchange and returns true when this exchange captured the
    /// session's first lead.
    ///
    /// `transcript` is the visitor-side history including their latest turn;
    /// the assistant reply is appended to it. A completed conversation keeps
    /// its transcript growing but never captures again.
    pub fn record_exchange(
        &mut self,
        transcript: Vec<ChatMessage>,
        reply: &str,
        lead_captured: bool,
        now: Timestamp,
    ) -> bool {
        let mut messages = transcript;
        messages.push(ChatMessage::assistant(reply));
        self.messages = messages;
        self.last_message_at = now;

        let target = if lead_captured {
            ConversationStatus::Completed
        } else {
            ConversationStatus::Active
        };
        match self.status.transition_to(target) {
            Ok(next) => {
                let first_capture = next == ConversationStatus::Completed;
                if first_capture {
                    self.lead_captured = true;
                    self.completed_at = Some(now);
                }
                self.status = next;
                first_capture
            }
            Err(_) => false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ConversationStatus::Completed
    }
}
