//! QR code repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CompanyId, DomainError, QrCodeId};
use crate::domain::qr_code::{QrCode, QrCodeStatus, Scan};

#[async_trait]
pub trait QrCodeRepository: Send + Sync {
    /// Inserts a new code. Returns `false` when the code string is taken.
    async fn insert(&self, qr_code: &QrCode) -> Result<bool, DomainError>;

    async fn find_by_id(&self, id: &QrCodeId) -> Result<Option<QrCode>, DomainError>;

    /// Finds an `active` code by its public code string.
    async fn find_active_by_code(&self, code: &str) -> Result<Option<QrCode>, DomainError>;

    /// A company's codes, newest first.
    async fn list_by_company(&self, company_id: &CompanyId) -> Result<Vec<QrCode>, DomainError>;

    /// # Errors
    ///
    /// - `QrCodeNotFound` if the code doesn't exist
    async fn update_status(&self, id: &QrCodeId, status: QrCodeStatus) -> Result<(), DomainError>;

    /// Logs a scan and bumps `total_scans`/`last_scan_at` in the store.
    async fn record_scan(&self, scan: &Scan) -> Result<(), DomainError>;
}
