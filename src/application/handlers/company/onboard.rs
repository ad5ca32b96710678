//! OnboardCompanyHandler - Creates the caller's company.

use std::sync::Arc;

use crate::domain::account::DASHBOARD_PATH;
use crate::domain::company::{Company, CompanyMember, CompanySettings, NewCompany};
use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode, Timestamp};
use crate::ports::CompanyRepository;

#[derive(Debug, Clone)]
pub struct OnboardCompanyCommand {
    pub user: AuthenticatedUser,
    pub company_name: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub industry: String,
}

#[derive(Debug, Clone)]
pub struct OnboardCompanyResult {
    pub company: Company,
    pub next: &'static str,
}

pub struct OnboardCompanyHandler {
    companies: Arc<dyn CompanyRepository>,
}

impl OnboardCompanyHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    pub async fn handle(&self, cmd: OnboardCompanyCommand) -> Result<OnboardCompanyResult, DomainError> {
        let details = NewCompany::parse(
            &cmd.company_name,
            &cmd.phone,
            &cmd.city,
            &cmd.state,
            &cmd.industry,
        )?;

        if self.companies.find_membership(&cmd.user.id).await?.is_some() {
            return Err(DomainError::new(
                ErrorCode::CompanyExists,
                "You already have a company",
            ));
        }

        let company = Company::register(details, cmd.user.email.clone(), Timestamp::now());
        let owner = CompanyMember::owner(cmd.user.id, company.id);
        let settings = CompanySettings {
            company_id: company.id,
            lead_email: Some(cmd.user.email.clone()),
        };
        self.companies.create_with_owner(&company, &owner, &settings).await?;

        tracing::info!(
            company_id = %company.id,
            user_id = %cmd.user.id,
            slug = %company.slug,
            "Company onboarded"
        );

        Ok(OnboardCompanyResult {
            company,
            next: DASHBOARD_PATH,
        })
    }
}
