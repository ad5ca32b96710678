//! GetDashboardHandler - Tenant home screen totals.

use std::sync::Arc;

use crate::domain::dashboard::{TenantDashboard, DASHBOARD_LIST_LIMIT};
use crate::domain::foundation::{AuthenticatedUser, DomainError};
use crate::ports::{CompanyRepository, LeadRepository, QrCodeRepository};

use crate::application::handlers::access::require_membership;

pub struct GetDashboardHandler {
    companies: Arc<dyn CompanyRepository>,
    qr_codes: Arc<dyn QrCodeRepository>,
    leads: Arc<dyn LeadRepository>,
}

impl GetDashboardHandler {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        qr_codes: Arc<dyn QrCodeRepository>,
        leads: Arc<dyn LeadRepository>,
    ) -> Self {
        Self {
            companies,
            qr_codes,
            leads,
        }
    }

    pub async fn handle(&self, user: &AuthenticatedUser) -> Result<TenantDashboard, DomainError> {
        let member = require_membership(self.companies.as_ref(), user).await?;

        let (qr_codes, recent_leads) = tokio::join!(
            self.qr_codes.list_by_company(&member.company_id),
            self.leads.list_by_company(&member.company_id, Some(DASHBOARD_LIST_LIMIT))
        );
        let mut qr_codes = qr_codes?;
        // Repository order is newest first; the dashboard lists oldest first.
        qr_codes.reverse();

        Ok(TenantDashboard::build(qr_codes, recent_leads?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::company::{OnboardCompanyCommand, OnboardCompanyHandler};
    use crate::domain::chatbot::{Conversation, LeadDetails};
    use crate::domain::foundation::{ChatSessionId, ErrorCode, Timestamp, UserId};
    use crate::domain::lead::Lead;
    use crate::domain::qr_code::{Channel, QrCode, Scan};
    use crate::ports::ConversationRepository;

    #[tokio::test]
    async fn totals_roll_up_from_codes() {
        let store = Arc::new(InMemoryStore::new());
        let user = AuthenticatedUser::new(UserId::new(), "owner@example.com");
        let company = OnboardCompanyHandler::new(store.clone())
            .handle(OnboardCompanyCommand {
                user: user.clone(),
                company_name: "Acme".into(),
                phone: "555".into(),
                city: "Denver".into(),
                state: "CO".into(),
                industry: "roofing".into(),
            })
            .await
            .unwrap()
            .company;

        let first = QrCode::new(company.id, "First", Channel::Vehicle, "aaaaaaaa".into(), Timestamp::now().minus_days(2)).unwrap();
        let second = QrCode::new(company.id, "Second", Channel::Handout, "bbbbbbbb".into(), Timestamp::now()).unwrap();
        QrCodeRepository::insert(store.as_ref(), &first).await.unwrap();
        QrCodeRepository::insert(store.as_ref(), &second).await.unwrap();
        for _ in 0..4 {
            store
                .record_scan(&Scan { qr_code_id: first.id, company_id: company.id, scanned_at: Timestamp::now() })
                .await
                .unwrap();
        }
        let conversation = Conversation::start(company.id, Some(first.id), ChatSessionId::new(), Timestamp::now());
        let details = LeadDetails { phone: Some("3035550199".into()), ..Default::default() };
        let lead = Lead::capture(company.id, Some(first.id), conversation.id, details, 200, Timestamp::now()).unwrap();
        store.complete_with_lead(&conversation, Some(&lead)).await.unwrap();

        let dashboard = GetDashboardHandler::new(store.clone(), store.clone(), store)
            .handle(&user)
            .await
            .unwrap();

        assert_eq!(dashboard.total_scans, 4);
        assert_eq!(dashboard.total_leads, 1);
        assert_eq!(dashboard.conversion_rate, "25.0");
        assert_eq!(dashboard.total_qr_codes, 2);
        assert_eq!(dashboard.qr_codes[0].name, "First");
    }

    #[tokio::test]
    async fn requires_company() {
        let store = Arc::new(InMemoryStore::new());
        let user = AuthenticatedUser::new(UserId::new(), "owner@example.com");

        let err = GetDashboardHandler::new(store.clone(), store.clone(), store)
            .handle(&user)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CompanyNotFound);
    }
}
