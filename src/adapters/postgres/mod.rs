//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - Accounts
//! - `PostgresCompanyRepository` - Companies, membership, settings, services, FAQs
//! - `PostgresQrCodeRepository` - QR codes and the scan log
//! - `PostgresConversationRepository` - Chat transcripts keyed by session
//! - `PostgresLeadRepository` - Captured leads
//! - `PostgresAdminReader` - Cross-tenant admin queries

mod admin_reader;
mod company_repository;
mod conversation_repository;
mod lead_repository;
mod qr_code_repository;
mod user_repository;

pub use admin_reader::PostgresAdminReader;
pub use company_repository::PostgresCompanyRepository;
pub use conversation_repository::PostgresConversationRepository;
pub use lead_repository::PostgresLeadRepository;
pub use qr_code_repository::PostgresQrCodeRepository;
pub use user_repository::PostgresUserRepository;

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::{DomainError, Timestamp};

/// Wraps a driver error with what we were doing.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| DomainError::database(format!("{}: {}", context, e))
}

/// Reads a column, mapping decode failures to `DatabaseError`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

pub(crate) fn timestamp_column(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    column::<chrono::DateTime<chrono::Utc>>(row, name).map(Timestamp::from_datetime)
}

pub(crate) fn optional_timestamp_column(row: &PgRow, name: &str) -> Result<Option<Timestamp>, DomainError> {
    column::<Option<chrono::DateTime<chrono::Utc>>>(row, name).map(|t| t.map(Timestamp::from_datetime))
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|d| d.is_unique_violation())
        .unwrap_or(false)
}

/// Parses a stored enum column.
pub(crate) fn parse_enum<T>(value: &str, what: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T, DomainError> {
    parse(value).ok_or_else(|| DomainError::database(format!("Invalid {}: {}", what, value)))
}
