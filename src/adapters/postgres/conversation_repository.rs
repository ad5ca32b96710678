//! PostgreSQL implementation of ConversationRepository.

use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres};

use crate::domain::chatbot::{ChatMessage, Conversation, ConversationStatus};
use crate::domain::foundation::{
    ChatSessionId, CompanyId, ConversationId, DomainError, QrCodeId,
};
use crate::domain::lead::Lead;
use crate::ports::ConversationRepository;

use super::lead_repository::insert_lead;
use super::{column, db_error, optional_timestamp_column, parse_enum, timestamp_column};

#[derive(Clone)]
pub struct PostgresConversationRepository {
    pool: PgPool,
}

impl PostgresConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationRepository for PostgresConversationRepository {
    async fn find_by_session(&self, session_id: &ChatSessionId) -> Result<Option<Conversation>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, company_id, qr_code_id, session_id, messages, status,
                   lead_captured, last_message_at, completed_at
            FROM conversations
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch conversation"))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let status: String = column(&row, "status")?;
        let messages: Json<Vec<ChatMessage>> = column(&row, "messages")?;
        let qr_code_id: Option<uuid::Uuid> = column(&row, "qr_code_id")?;

        Ok(Some(Conversation {
            id: ConversationId::from_uuid(column(&row, "id")?),
            company_id: CompanyId::from_uuid(column(&row, "company_id")?),
            qr_code_id: qr_code_id.map(QrCodeId::from_uuid),
            session_id: ChatSessionId::from_uuid(column(&row, "session_id")?),
            messages: messages.0,
            status: parse_enum(&status, "conversation status", ConversationStatus::parse)?,
            lead_captured: column(&row, "lead_captured")?,
            last_message_at: timestamp_column(&row, "last_message_at")?,
            completed_at: optional_timestamp_column(&row, "completed_at")?,
        }))
    }

    async fn upsert(&self, conversation: &Conversation) -> Result<(), DomainError> {
        bind_conversation(
            sqlx::query(
                r#"
                INSERT INTO conversations (
                    id, company_id, qr_code_id, session_id, messages, status,
                    lead_captured, last_message_at, completed_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ON CONFLICT (session_id) DO UPDATE SET
                    messages = EXCLUDED.messages,
                    status = CASE WHEN conversations.status = 'completed'
                                  THEN conversations.status ELSE EXCLUDED.status END,
                    lead_captured = conversations.lead_captured OR EXCLUDED.lead_captured,
                    last_message_at = EXCLUDED.last_message_at,
                    completed_at = COALESCE(conversations.completed_at, EXCLUDED.completed_at)
                WHERE conversations.company_id = EXCLUDED.company_id
                "#,
            ),
            conversation,
        )
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to upsert conversation"))?;

        Ok(())
    }

    async fn complete_with_lead(
        &self,
        conversation: &Conversation,
        lead: Option<&Lead>,
    ) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        // The row lock taken by ON CONFLICT serializes concurrent captures;
        // the loser re-checks the status and gets no row back.
        let claimed = bind_conversation(
            sqlx::query(
                r#"
                INSERT INTO conversations (
                    id, company_id, qr_code_id, session_id, messages, status,
                    lead_captured, last_message_at, completed_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                ON CONFLICT (session_id) DO UPDATE SET
                    messages = EXCLUDED.messages,
                    status = EXCLUDED.status,
                    lead_captured = EXCLUDED.lead_captured,
                    last_message_at = EXCLUDED.last_message_at,
                    completed_at = EXCLUDED.completed_at
                WHERE conversations.status = 'active'
                  AND conversations.company_id = EXCLUDED.company_id
                RETURNING id
                "#,
            ),
            conversation,
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_error("Failed to complete conversation"))?
        .is_some();

        if !claimed {
            sqlx::query(
                r#"
                UPDATE conversations SET messages = $3, last_message_at = $4
                WHERE session_id = $1 AND company_id = $2
                "#,
            )
            .bind(conversation.session_id.as_uuid())
            .bind(conversation.company_id.as_uuid())
            .bind(Json(&conversation.messages))
            .bind(conversation.last_message_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to update conversation"))?;

            tx.commit().await.map_err(db_error("Failed to commit transaction"))?;
            return Ok(false);
        }

        if let Some(lead) = lead {
            insert_lead(&mut *tx, lead).await?;
            if let Some(qr_code_id) = &lead.qr_code_id {
                sqlx::query("UPDATE qr_codes SET total_leads = total_leads + 1 WHERE id = $1")
                    .bind(qr_code_id.as_uuid())
                    .execute(&mut *tx)
                    .await
                    .map_err(db_error("Failed to increment lead count"))?;
            }
        }

        tx.commit().await.map_err(db_error("Failed to commit transaction"))?;
        Ok(true)
    }
}

fn bind_conversation<'q>(
    query: Query<'q, Postgres, PgArguments>,
    conversation: &'q Conversation,
) -> Query<'q, Postgres, PgArguments> {
    query
        .bind(conversation.id.as_uuid())
        .bind(conversation.company_id.as_uuid())
        .bind(conversation.qr_code_id.map(|id| *id.as_uuid()))
        .bind(conversation.session_id.as_uuid())
        .bind(Json(&conversation.messages))
        .bind(conversation.status.as_str())
        .bind(conversation.lead_captured)
        .bind(conversation.last_message_at.as_datetime())
        .bind(conversation.completed_at.map(|t| *t.as_datetime()))
}
