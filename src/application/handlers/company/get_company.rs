//! GetCompanyHandler - The caller's company with its chatbot configuration.

use std::sync::Arc;

use crate::domain::company::{Company, CompanySettings, Faq, Service};
use crate::domain::foundation::{AuthenticatedUser, CompanyId, DomainError, ErrorCode};
use crate::ports::CompanyRepository;

use crate::application::handlers::access::require_membership;

/// A company as its owner sees it on the settings screen.
#[derive(Debug, Clone)]
pub struct CompanyProfile {
    pub company: Company,
    pub settings: CompanySettings,
    pub services: Vec<Service>,
    pub faqs: Vec<Faq>,
}

pub struct GetCompanyHandler {
    companies: Arc<dyn CompanyRepository>,
}

impl GetCompanyHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    pub async fn handle(&self, user: &AuthenticatedUser) -> Result<CompanyProfile, DomainError> {
        let member = require_membership(self.companies.as_ref(), user).await?;
        load_profile(self.companies.as_ref(), &member.company_id).await
    }
}

pub(super) async fn load_profile(
    companies: &dyn CompanyRepository,
    company_id: &CompanyId,
) -> Result<CompanyProfile, DomainError> {
    let company = companies
        .find_by_id(company_id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::CompanyNotFound, "Company not found"))?;

    let (settings, services, faqs) = tokio::join!(
        companies.settings(company_id),
        companies.services(company_id),
        companies.faqs(company_id)
    );

    Ok(CompanyProfile {
        settings: settings?.unwrap_or(CompanySettings {
            company_id: company.id,
            lead_email: company.email.clone(),
        }),
        services: services?,
        faqs: faqs?,
        company,
    })
}
