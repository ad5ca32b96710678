//! Company repository port.
//!
//! Covers the company row plus everything hanging off it that the tenant
//! edits: settings, services and FAQs, and the user membership link.

use async_trait::async_trait;

use crate::domain::company::{
    Company, CompanyMember, CompanySettings, CompanyStatus, Faq, Service,
};
use crate::domain::foundation::{CompanyId, DomainError, UserId};

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Creates the company, its owner link and its settings atomically.
    ///
    /// # Errors
    ///
    /// - `CompanyExists` if the user already belongs to a company
    /// - `DatabaseError` on persistence failure
    async fn create_with_owner(
        &self,
        company: &Company,
        owner: &CompanyMember,
        settings: &CompanySettings,
    ) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, DomainError>;

    /// The company link for a user, if any.
    async fn find_membership(&self, user_id: &UserId) -> Result<Option<CompanyMember>, DomainError>;

    /// Persists branding and chatbot fields.
    ///
    /// # Errors
    ///
    /// - `CompanyNotFound` if the company doesn't exist
    async fn update_profile(&self, company: &Company) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `CompanyNotFound` if the company doesn't exist
    async fn update_status(&self, id: &CompanyId, status: CompanyStatus) -> Result<(), DomainError>;

    async fn settings(&self, id: &CompanyId) -> Result<Option<CompanySettings>, DomainError>;

    async fn save_settings(&self, settings: &CompanySettings) -> Result<(), DomainError>;

    /// All services ordered by `sort_order`.
    async fn services(&self, id: &CompanyId) -> Result<Vec<Service>, DomainError>;

    /// Active services ordered by `sort_order`.
    async fn active_services(&self, id: &CompanyId) -> Result<Vec<Service>, DomainError>;

    /// Replaces the whole service list.
    async fn replace_services(&self, id: &CompanyId, services: &[Service]) -> Result<(), DomainError>;

    /// FAQs ordered by `sort_order`.
    async fn faqs(&self, id: &CompanyId) -> Result<Vec<Faq>, DomainError>;

    /// Replaces the whole FAQ list.
    async fn replace_faqs(&self, id: &CompanyId, faqs: &[Faq]) -> Result<(), DomainError>;
}
