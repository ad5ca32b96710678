//! PostgreSQL implementation of AdminReader.
//!
//! Cross-tenant queries for the platform admin area. Callers must have
//! checked the platform-admin flag already.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::company::CompanyStatus;
use crate::domain::dashboard::{AdminLeadRow, AdminOverview, CompanySummary, ADMIN_RECENT_COMPANIES};
use crate::domain::foundation::{CompanyId, DomainError, LeadId, Timestamp};
use crate::domain::lead::LeadStatus;
use crate::ports::AdminReader;

use super::{column, db_error, parse_enum, timestamp_column};

const SUMMARY_QUERY: &str = r#"
    SELECT c.id, c.name, c.slug, c.city, c.state, c.status, c.created_at,
           i.name AS industry_name
    FROM companies c
    LEFT JOIN industries i ON i.id = c.industry_id
    ORDER BY c.created_at DESC
"#;

#[derive(Clone)]
pub struct PostgresAdminReader {
    pool: PgPool,
}

impl PostgresAdminReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminReader for PostgresAdminReader {
    async fn overview(&self, scans_since: Timestamp) -> Result<AdminOverview, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM companies) AS total_companies,
                (SELECT COUNT(*) FROM companies WHERE status = 'active') AS active_companies,
                (SELECT COALESCE(SUM(billed_amount_cents), 0)::BIGINT FROM leads WHERE billed) AS total_revenue_cents,
                (SELECT COUNT(*) FROM leads WHERE NOT billed) AS pending_leads,
                (SELECT COUNT(*) FROM scans WHERE scanned_at >= $1) AS scans_last_30_days
            "#,
        )
        .bind(scans_since.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to load admin overview"))?;

        let query = format!("{} LIMIT $1", SUMMARY_QUERY);
        let recent = sqlx::query(&query)
            .bind(ADMIN_RECENT_COMPANIES as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to load recent companies"))?;

        Ok(AdminOverview {
            total_companies: column(&row, "total_companies")?,
            active_companies: column(&row, "active_companies")?,
            total_revenue_cents: column(&row, "total_revenue_cents")?,
            pending_leads: column(&row, "pending_leads")?,
            scans_last_30_days: column(&row, "scans_last_30_days")?,
            recent_companies: recent.iter().map(row_to_summary).collect::<Result<_, _>>()?,
        })
    }

    async fn companies(&self) -> Result<Vec<CompanySummary>, DomainError> {
        let rows = sqlx::query(SUMMARY_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list companies"))?;

        rows.iter().map(row_to_summary).collect()
    }

    async fn recent_leads(&self, limit: usize) -> Result<Vec<AdminLeadRow>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT l.id, l.company_id, c.name AS company_name, q.name AS qr_code_name,
                   l.first_name, l.phone, l.service, l.status, l.billed,
                   l.billed_amount_cents, l.created_at
            FROM leads l
            JOIN companies c ON c.id = l.company_id
            LEFT JOIN qr_codes q ON q.id = l.qr_code_id
            ORDER BY l.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list leads"))?;

        rows.iter()
            .map(|row| {
                let status: String = column(row, "status")?;
                Ok(AdminLeadRow {
                    id: LeadId::from_uuid(column(row, "id")?),
                    company_id: CompanyId::from_uuid(column(row, "company_id")?),
                    company_name: column(row, "company_name")?,
                    qr_code_name: column(row, "qr_code_name")?,
                    first_name: column(row, "first_name")?,
                    phone: column(row, "phone")?,
                    service: column(row, "service")?,
                    status: parse_enum(&status, "lead status", LeadStatus::parse)?,
                    billed: column(row, "billed")?,
                    billed_amount_cents: column(row, "billed_amount_cents")?,
                    created_at: timestamp_column(row, "created_at")?,
                })
            })
            .collect()
    }
}

fn row_to_summary(row: &PgRow) -> Result<CompanySummary, DomainError> {
    let status: String = column(row, "status")?;
    Ok(CompanySummary {
        id: CompanyId::from_uuid(column(row, "id")?),
        name: column(row, "name")?,
        slug: column(row, "slug")?,
        city: column(row, "city")?,
        state: column(row, "state")?,
        industry_name: column(row, "industry_name")?,
        status: parse_enum(&status, "company status", CompanyStatus::parse)?,
        created_at: timestamp_column(row, "created_at")?,
    })
}
