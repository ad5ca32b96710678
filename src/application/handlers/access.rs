//! Tenant and admin access checks shared by the authenticated handlers.

use crate::domain::company::CompanyMember;
use crate::domain::foundation::{AuthenticatedUser, DomainError, ErrorCode};
use crate::ports::CompanyRepository;

/// The caller's company link. Users who have not onboarded get
/// `COMPANY_NOT_FOUND`.
pub async fn require_membership(
    companies: &dyn CompanyRepository,
    user: &AuthenticatedUser,
) -> Result<CompanyMember, DomainError> {
    companies
        .find_membership(&user.id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::CompanyNotFound, "Complete onboarding first"))
}

/// Membership with the platform-admin flag, or `FORBIDDEN`.
pub async fn require_platform_admin(
    companies: &dyn CompanyRepository,
    user: &AuthenticatedUser,
) -> Result<CompanyMember, DomainError> {
    match companies.find_membership(&user.id).await? {
        Some(member) if member.is_platform_admin => Ok(member),
        _ => {
            tracing::warn!(user_id = %user.id, "Non-admin attempted admin access");
            Err(DomainError::new(ErrorCode::Forbidden, "Admin access required"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::company::{Company, CompanySettings, NewCompany};
    use crate::domain::foundation::{Timestamp, UserId};

    async fn member_store(admin: bool) -> (InMemoryStore, AuthenticatedUser) {
        let store = InMemoryStore::new();
        let user = AuthenticatedUser::new(UserId::new(), "owner@example.com");
        let details = NewCompany::parse("Acme", "555", "Denver", "CO", "roofing").unwrap();
        let company = Company::register(details, &user.email, Timestamp::now());
        let settings = CompanySettings { company_id: company.id, lead_email: None };
        store
            .create_with_owner(&company, &CompanyMember::owner(user.id, company.id), &settings)
            .await
            .unwrap();
        if admin {
            store.grant_platform_admin(&user.id).await.unwrap();
        }
        (store, user)
    }

    #[tokio::test]
    async fn membership_required() {
        let store = InMemoryStore::new();
        let stranger = AuthenticatedUser::new(UserId::new(), "x@example.com");
        let err = require_membership(&store, &stranger).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CompanyNotFound);

        let (store, user) = member_store(false).await;
        assert!(require_membership(&store, &user).await.is_ok());
    }

    #[tokio::test]
    async fn admin_flag_required() {
        let (store, user) = member_store(false).await;
        let err = require_platform_admin(&store, &user).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        let (store, user) = member_store(true).await;
        assert!(require_platform_admin(&store, &user).await.unwrap().is_platform_admin);
    }
}
