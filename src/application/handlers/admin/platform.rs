//! Platform admin handlers. Every call checks the admin flag first.

use std::sync::Arc;

use crate::domain::company::{Company, CompanyStatus};
use crate::domain::dashboard::{
    AdminLeadRow, AdminOverview, CompanySummary, ADMIN_RECENT_LEADS, SCAN_WINDOW_DAYS,
};
use crate::domain::foundation::{
    AuthenticatedUser, CompanyId, DomainError, ErrorCode, StateMachine, Timestamp, ValidationError,
};
use crate::ports::{AdminReader, CompanyRepository};

use crate::application::handlers::access::require_platform_admin;

#[derive(Debug, Clone)]
pub struct UpdateCompanyStatusCommand {
    pub admin: AuthenticatedUser,
    pub company_id: CompanyId,
    pub status: String,
}

pub struct AdminHandler {
    companies: Arc<dyn CompanyRepository>,
    reader: Arc<dyn AdminReader>,
}

impl AdminHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>, reader: Arc<dyn AdminReader>) -> Self {
        Self { companies, reader }
    }

    pub async fn overview(&self, admin: &AuthenticatedUser) -> Result<AdminOverview, DomainError> {
        require_platform_admin(self.companies.as_ref(), admin).await?;
        self.reader
            .overview(Timestamp::now().minus_days(SCAN_WINDOW_DAYS))
            .await
    }

    pub async fn companies(&self, admin: &AuthenticatedUser) -> Result<Vec<CompanySummary>, DomainError> {
        require_platform_admin(self.companies.as_ref(), admin).await?;
        self.reader.companies().await
    }

    pub async fn recent_leads(&self, admin: &AuthenticatedUser) -> Result<Vec<AdminLeadRow>, DomainError> {
        require_platform_admin(self.companies.as_ref(), admin).await?;
        self.reader.recent_leads(ADMIN_RECENT_LEADS).await
    }

    pub async fn update_company_status(&self, cmd: UpdateCompanyStatusCommand) -> Result<Company, DomainError> {
        require_platform_admin(self.companies.as_ref(), &cmd.admin).await?;
        let target = CompanyStatus::parse(&cmd.status).ok_or_else(|| {
            ValidationError::invalid_format("status", "must be active, suspended or cancelled")
        })?;

        let mut company = self
            .companies
            .find_by_id(&cmd.company_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::CompanyNotFound, "Company not found"))?;
        if company.status == target {
            return Ok(company);
        }

        company.status = company
            .status
            .transition_to(target)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        self.companies.update_status(&company.id, company.status).await?;

        tracing::info!(
            company_id = %company.id,
            admin_id = %cmd.admin.id,
            status = company.status.as_str(),
            "Company status changed"
        );
        Ok(company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::company::{OnboardCompanyCommand, OnboardCompanyHandler};
    use crate::domain::foundation::UserId;

    async fn onboard(store: &Arc<InMemoryStore>, name: &str) -> (AuthenticatedUser, Company) {
        let user = AuthenticatedUser::new(UserId::new(), format!("{}@example.com", UserId::new()));
        let company = OnboardCompanyHandler::new(store.clone())
            .handle(OnboardCompanyCommand {
                user: user.clone(),
                company_name: name.into(),
                phone: "555".into(),
                city: "Denver".into(),
                state: "CO".into(),
                industry: "roofing".into(),
            })
            .await
            .unwrap()
            .company;
        (user, company)
    }

    async fn admin_and_handler() -> (Arc<InMemoryStore>, AuthenticatedUser, AdminHandler) {
        let store = Arc::new(InMemoryStore::new());
        let (admin, _) = onboard(&store, "Tapzilla HQ").await;
        store.grant_platform_admin(&admin.id).await.unwrap();
        let handler = AdminHandler::new(store.clone(), store.clone());
        (store, admin, handler)
    }

    #[tokio::test]
    async fn non_admin_is_forbidden() {
        let store = Arc::new(InMemoryStore::new());
        let (user, _) = onboard(&store, "Acme").await;
        let handler = AdminHandler::new(store.clone(), store);

        assert_eq!(handler.overview(&user).await.unwrap_err().code, ErrorCode::Forbidden);
        assert_eq!(handler.companies(&user).await.unwrap_err().code, ErrorCode::Forbidden);
        assert_eq!(handler.recent_leads(&user).await.unwrap_err().code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn admin_sees_all_companies() {
        let (store, admin, handler) = admin_and_handler().await;
        onboard(&store, "Acme").await;

        let overview = handler.overview(&admin).await.unwrap();
        assert_eq!(overview.total_companies, 2);
        assert_eq!(handler.companies(&admin).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn suspend_then_cancel() {
        let (store, admin, handler) = admin_and_handler().await;
        let (_, company) = onboard(&store, "Acme").await;

        let cmd = |status: &str| UpdateCompanyStatusCommand {
            admin: admin.clone(),
            company_id: company.id,
            status: status.into(),
        };

        let suspended = handler.update_company_status(cmd("suspended")).await.unwrap();
        assert_eq!(suspended.status, CompanyStatus::Suspended);

        handler.update_company_status(cmd("cancelled")).await.unwrap();
        let err = handler.update_company_status(cmd("active")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);

        let err = handler.update_company_status(cmd("deleted")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
