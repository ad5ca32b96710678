//! GetAccountHandler - Who the caller is and where they should go next.

use std::sync::Arc;

use crate::domain::account::{User, DASHBOARD_PATH, ONBOARDING_PATH};
use crate::domain::company::CompanyMember;
use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode};
use crate::ports::{CompanyRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct AccountView {
    pub user: User,
    pub membership: Option<CompanyMember>,
    /// `/onboarding` until the user has a company, then `/dashboard`.
    pub next: &'static str,
}

pub struct GetAccountHandler {
    users: Arc<dyn UserRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl GetAccountHandler {
    pub fn new(users: Arc<dyn UserRepository>, companies: Arc<dyn CompanyRepository>) -> Self {
        Self { users, companies }
    }

    pub async fn handle(&self, caller: &AuthenticatedUser) -> Result<AccountView, DomainError> {
        let user = self
            .users
            .find_by_id(&caller.id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::Unauthorized, "Account no longer exists"))?;
        let membership = self.companies.find_membership(&caller.id).await?;

        Ok(AccountView {
            next: if membership.is_some() { DASHBOARD_PATH } else { ONBOARDING_PATH },
            user,
            membership,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::company::{Company, CompanySettings, NewCompany};
    use crate::domain::foundation::{Timestamp, UserId};

    #[tokio::test]
    async fn next_depends_on_company() {
        let store = Arc::new(InMemoryStore::new());
        let user = User::new("owner@example.com".into(), "hash".into(), Timestamp::now());
        store.create(&user).await.unwrap();
        let caller = AuthenticatedUser::new(user.id, user.email.clone());
        let handler = GetAccountHandler::new(store.clone(), store.clone());

        let view = handler.handle(&caller).await.unwrap();
        assert_eq!(view.next, "/onboarding");
        assert!(view.membership.is_none());

        let details = NewCompany::parse("Acme", "555", "Denver", "CO", "roofing").unwrap();
        let company = Company::register(details, "owner@example.com", Timestamp::now());
        let settings = CompanySettings { company_id: company.id, lead_email: None };
        store
            .create_with_owner(&company, &CompanyMember::owner(user.id, company.id), &settings)
            .await
            .unwrap();

        let view = handler.handle(&caller).await.unwrap();
        assert_eq!(view.next, "/dashboard");
        assert_eq!(view.membership.unwrap().company_id, company.id);
    }

    #[tokio::test]
    async fn deleted_user_is_unauthorized() {
        let store = Arc::new(InMemoryStore::new());
        let handler = GetAccountHandler::new(store.clone(), store);
        let caller = AuthenticatedUser::new(UserId::new(), "gone@example.com");

        let err = handler.handle(&caller).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }
}
