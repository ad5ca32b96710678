//! Conversation repository port.

use async_trait::async_trait;

use crate::domain::chatbot::Conversation;
use crate::domain::foundation::{ChatSessionId, DomainError};
use crate::domain::lead::Lead;

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn find_by_session(&self, session_id: &ChatSessionId) -> Result<Option<Conversation>, DomainError>;

    /// Inserts or updates the row for `conversation.session_id`.
    ///
    /// A stored row owned by another company is left untouched, and a
    /// completed row stays completed.
    async fn upsert(&self, conversation: &Conversation) -> Result<(), DomainError>;

    /// Completes the conversation and, in the same unit of work, stores
    /// `lead` and bumps its QR code's lead count.
    ///
    /// Returns `false` when the stored session was already completed (or
    /// belongs to another company). Only the transcript is updated then,
    /// and no lead is written.
    async fn complete_with_lead(
        &self,
        conversation: &Conversation,
        lead: Option<&Lead>,
    ) -> Result<bool, DomainError>;
}
