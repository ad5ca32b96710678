//! PostgreSQL implementation of LeadRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgExecutor, PgPool};

use crate::domain::dashboard::LeadSummary;
use crate::domain::foundation::{
    CompanyId, ConversationId, DomainError, ErrorCode, LeadId, QrCodeId,
};
use crate::domain::lead::{Lead, LeadStatus};
use crate::domain::qr_code::Channel;
use crate::ports::LeadRepository;

use super::{column, db_error, parse_enum, timestamp_column};

#[derive(Clone)]
pub struct PostgresLeadRepository {
    pool: PgPool,
}

impl PostgresLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn insert(&self, lead: &Lead) -> Result<(), DomainError> {
        insert_lead(&self.pool, lead).await
    }

    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>, DomainError> {
        sqlx::query(
            r#"
            SELECT id, company_id, qr_code_id, conversation_id, first_name, phone, email,
                   service, address, timeline, status, billed, billed_amount_cents, created_at
            FROM leads WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to fetch lead"))?
        .map(|row| row_to_lead(&row))
        .transpose()
    }

    async fn list_by_company(
        &self,
        company_id: &CompanyId,
        limit: Option<usize>,
    ) -> Result<Vec<LeadSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT l.id, l.first_name, l.phone, l.email, l.service, l.address, l.timeline,
                   l.status, l.created_at, q.name AS qr_code_name, q.channel AS qr_code_channel
            FROM leads l
            LEFT JOIN qr_codes q ON q.id = l.qr_code_id
            WHERE l.company_id = $1
            ORDER BY l.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(company_id.as_uuid())
        .bind(limit.map(|l| l as i64))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list leads"))?;

        rows.iter().map(row_to_summary).collect()
    }

    async fn update_status(&self, id: &LeadId, status: LeadStatus) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE leads SET status = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update lead status"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::LeadNotFound, format!("Lead not found: {}", id)));
        }
        Ok(())
    }
}


/// Inserts a lead row on any executor, so callers can run it inside their
/// own transaction.
pub(super) async fn insert_lead<'e, E>(executor: E, lead: &Lead) -> Result<(), DomainError>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO leads (
            id, company_id, qr_code_id, conversation_id, first_name, phone, email,
            service, address, timeline, status, billed, billed_amount_cents, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        "#,
    )
    .bind(lead.id.as_uuid())
    .bind(lead.company_id.as_uuid())
    .bind(lead.qr_code_id.map(|id| *id.as_uuid()))
    .bind(lead.conversation_id.map(|id| *id.as_uuid()))
    .bind(&lead.first_name)
    .bind(&lead.phone)
    .bind(&lead.email)
    .bind(&lead.service)
    .bind(&lead.address)
    .bind(&lead.timeline)
    .bind(lead.status.as_str())
    .bind(lead.billed)
    .bind(lead.billed_amount_cents)
    .bind(lead.created_at.as_datetime())
    .execute(executor)
    .await
    .map_err(db_error("Failed to insert lead"))?;

    Ok(())
}

fn row_to_lead(row: &PgRow) -> Result<Lead, DomainError> {
    let status: String = column(row, "status")?;
    let qr_code_id: Option<uuid::Uuid> = column(row, "qr_code_id")?;
    let conversation_id: Option<uuid::Uuid> = column(row, "conversation_id")?;
    Ok(Lead {
        id: LeadId::from_uuid(column(row, "id")?),
        company_id: CompanyId::from_uuid(column(row, "company_id")?),
        qr_code_id: qr_code_id.map(QrCodeId::from_uuid),
        conversation_id: conversation_id.map(ConversationId::from_uuid),
        first_name: column(row, "first_name")?,
        phone: column(row, "phone")?,
        email: column(row, "email")?,
        service: column(row, "service")?,
        address: column(row, "address")?,
        timeline: column(row, "timeline")?,
        status: parse_enum(&status, "lead status", LeadStatus::parse)?,
        billed: column(row, "billed")?,
        billed_amount_cents: column(row, "billed_amount_cents")?,
        created_at: timestamp_column(row, "created_at")?,
    })
}

fn row_to_summary(row: &PgRow) -> Result<LeadSummary, DomainError> {
    let status: String = column(row, "status")?;
    let channel: Option<String> = column(row, "qr_code_channel")?;
    Ok(LeadSummary {
        id: LeadId::from_uuid(column(row, "id")?),
        first_name: column(row, "first_name")?,
        phone: column(row, "phone")?,
        email: column(row, "email")?,
        service: column(row, "service")?,
        address: column(row, "address")?,
        timeline: column(row, "timeline")?,
        status: parse_enum(&status, "lead status", LeadStatus::parse)?,
        qr_code_name: column(row, "qr_code_name")?,
        qr_code_channel: channel.as_deref().and_then(Channel::parse),
        created_at: timestamp_column(row, "created_at")?,
    })
}
