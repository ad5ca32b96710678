//! Lead repository port.

use async_trait::async_trait;

use crate::domain::dashboard::LeadSummary;
use crate::domain::foundation::{CompanyId, DomainError, LeadId};
use crate::domain::lead::{Lead, LeadStatus};

#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn insert(&self, lead: &Lead) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>, DomainError>;

    /// A company's leads newest first, joined with their QR code.
    async fn list_by_company(
        &self,
        company_id: &CompanyId,
        limit: Option<usize>,
    ) -> Result<Vec<LeadSummary>, DomainError>;

    /// # Errors
    ///
    /// - `LeadNotFound` if the lead doesn't exist
    async fn update_status(&self, id: &LeadId, status: LeadStatus) -> Result<(), DomainError>;
}
