//! PostgreSQL implementation of QrCodeRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::domain::foundation::{CompanyId, DomainError, ErrorCode, QrCodeId};
use crate::domain::qr_code::{Channel, QrCode, QrCodeStatus, Scan};
use crate::ports::QrCodeRepository;

use super::{column, db_error, optional_timestamp_column, parse_enum, timestamp_column};

const QR_CODE_COLUMNS: &str =
    "id, company_id, name, code, channel, status, total_scans, total_leads, last_scan_at, created_at";

#[derive(Clone)]
pub struct PostgresQrCodeRepository {
    pool: PgPool,
}

impl PostgresQrCodeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QrCodeRepository for PostgresQrCodeRepository {
    async fn insert(&self, qr_code: &QrCode) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO qr_codes (id, company_id, name, code, channel, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .bind(qr_code.id.as_uuid())
        .bind(qr_code.company_id.as_uuid())
        .bind(&qr_code.name)
        .bind(&qr_code.code)
        .bind(qr_code.channel.as_str())
        .bind(qr_code.status.as_str())
        .bind(qr_code.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to insert QR code"))?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_by_id(&self, id: &QrCodeId) -> Result<Option<QrCode>, DomainError> {
        let query = format!("SELECT {} FROM qr_codes WHERE id = $1", QR_CODE_COLUMNS);
        sqlx::query(&query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch QR code"))?
            .map(|row| row_to_qr_code(&row))
            .transpose()
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<QrCode>, DomainError> {
        let query = format!(
            "SELECT {} FROM qr_codes WHERE code = $1 AND status = 'active'",
            QR_CODE_COLUMNS
        );
        sqlx::query(&query)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to fetch QR code by code"))?
            .map(|row| row_to_qr_code(&row))
            .transpose()
    }

    async fn list_by_company(&self, company_id: &CompanyId) -> Result<Vec<QrCode>, DomainError> {
        let query = format!(
            "SELECT {} FROM qr_codes WHERE company_id = $1 ORDER BY created_at DESC",
            QR_CODE_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(company_id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list QR codes"))?;

        rows.iter().map(row_to_qr_code).collect()
    }

    async fn update_status(&self, id: &QrCodeId, status: QrCodeStatus) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE qr_codes SET status = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update QR code status"))?;

        if result.rows_affected() == 0 {
            return Err(qr_code_not_found(id));
        }
        Ok(())
    }

    async fn record_scan(&self, scan: &Scan) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin transaction"))?;

        sqlx::query("INSERT INTO scans (qr_code_id, company_id, scanned_at) VALUES ($1, $2, $3)")
            .bind(scan.qr_code_id.as_uuid())
            .bind(scan.company_id.as_uuid())
            .bind(scan.scanned_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(db_error("Failed to insert scan"))?;

        // Single-statement increment so concurrent scans never lose a count.
        sqlx::query(
            "UPDATE qr_codes SET total_scans = total_scans + 1, last_scan_at = $2 WHERE id = $1",
        )
        .bind(scan.qr_code_id.as_uuid())
        .bind(scan.scanned_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(db_error("Failed to increment scan count"))?;

        tx.commit().await.map_err(db_error("Failed to commit transaction"))?;
        Ok(())
    }
}

fn qr_code_not_found(id: &QrCodeId) -> DomainError {
    DomainError::new(ErrorCode::QrCodeNotFound, format!("QR code not found: {}", id))
}

fn row_to_qr_code(row: &PgRow) -> Result<QrCode, DomainError> {
    let channel: String = column(row, "channel")?;
    let status: String = column(row, "status")?;
    Ok(QrCode {
        id: QrCodeId::from_uuid(column(row, "id")?),
        company_id: CompanyId::from_uuid(column(row, "company_id")?),
        name: column(row, "name")?,
        code: column(row, "code")?,
        channel: parse_enum(&channel, "channel", Channel::parse)?,
        status: parse_enum(&status, "QR code status", QrCodeStatus::parse)?,
        total_scans: column(row, "total_scans")?,
        total_leads: column(row, "total_leads")?,
        last_scan_at: optional_timestamp_column(row, "last_scan_at")?,
        created_at: timestamp_column(row, "created_at")?,
    })
}
