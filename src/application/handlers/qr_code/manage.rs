//! QR code handlers: create, list, get and pause/resume.

use std::sync::Arc;

use crate::domain::foundation::{
    AuthenticatedUser, DomainError, ErrorCode, QrCodeId, StateMachine, Timestamp, ValidationError,
};
use crate::domain::qr_code::{generate_code, Channel, QrCode, QrCodeStatus};
use crate::ports::{CompanyRepository, QrCodeRepository};

use crate::application::handlers::access::require_membership;

/// Fresh codes to try before giving up on a unique one.
const MAX_CODE_ATTEMPTS: usize = 5;

#[derive(Debug, Clone)]
pub struct CreateQrCodeCommand {
    pub user: AuthenticatedUser,
    pub name: String,
    pub channel: String,
}

#[derive(Debug, Clone)]
pub struct UpdateQrCodeStatusCommand {
    pub user: AuthenticatedUser,
    pub qr_code_id: QrCodeId,
    pub status: String,
}

pub struct QrCodeHandler {
    companies: Arc<dyn CompanyRepository>,
    qr_codes: Arc<dyn QrCodeRepository>,
}

impl QrCodeHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>, qr_codes: Arc<dyn QrCodeRepository>) -> Self {
        Self { companies, qr_codes }
    }

    pub async fn create(&self, cmd: CreateQrCodeCommand) -> Result<QrCode, DomainError> {
        let member = require_membership(self.companies.as_ref(), &cmd.user).await?;
        let channel = Channel::parse(&cmd.channel).ok_or_else(|| {
            ValidationError::invalid_format("channel", "must be vehicle, job_site, partner or handout")
        })?;

        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code(&mut rand::thread_rng());
            let qr = QrCode::new(member.company_id, &cmd.name, channel, code, Timestamp::now())?;
            if self.qr_codes.insert(&qr).await? {
                tracing::info!(company_id = %member.company_id, qr_code_id = %qr.id, code = %qr.code, "QR code created");
                return Ok(qr);
            }
            tracing::debug!(code = %qr.code, "QR code collision, regenerating");
        }

        Err(DomainError::new(
            ErrorCode::InternalError,
            "Could not allocate a unique QR code",
        ))
    }

    /// The caller's codes, newest first.
    pub async fn list(&self, user: &AuthenticatedUser) -> Result<Vec<QrCode>, DomainError> {
        let member = require_membership(self.companies.as_ref(), user).await?;
        self.qr_codes.list_by_company(&member.company_id).await
    }

    pub async fn get(&self, user: &AuthenticatedUser, id: &QrCodeId) -> Result<QrCode, DomainError> {
        let member = require_membership(self.companies.as_ref(), user).await?;
        self.qr_codes
            .find_by_id(id)
            .await?
            .filter(|qr| qr.company_id == member.company_id)
            .ok_or_else(|| DomainError::new(ErrorCode::QrCodeNotFound, "QR code not found"))
    }

    pub async fn update_status(&self, cmd: UpdateQrCodeStatusCommand) -> Result<QrCode, DomainError> {
        let target = QrCodeStatus::parse(&cmd.status)
            .ok_or_else(|| ValidationError::invalid_format("status", "must be active or paused"))?;
        let mut qr = self.get(&cmd.user, &cmd.qr_code_id).await?;
        if qr.status == target {
            return Ok(qr);
        }

        qr.status = qr.status.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
        })?;
        self.qr_codes.update_status(&qr.id, qr.status).await?;
        Ok(qr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::company::{OnboardCompanyCommand, OnboardCompanyHandler};
    use crate::domain::foundation::UserId;
    use crate::domain::qr_code::is_valid_code;

    async fn onboarded(store: &Arc<InMemoryStore>) -> AuthenticatedUser {
        let user = AuthenticatedUser::new(UserId::new(), format!("{}@example.com", UserId::new()));
        OnboardCompanyHandler::new(store.clone())
            .handle(OnboardCompanyCommand {
                user: user.clone(),
                company_name: "Acme Roofing".into(),
                phone: "555-0100".into(),
                city: "Denver".into(),
                state: "CO".into(),
                industry: "roofing".into(),
            })
            .await
            .unwrap();
        user
    }

    fn create(user: &AuthenticatedUser, name: &str, channel: &str) -> CreateQrCodeCommand {
        CreateQrCodeCommand { user: user.clone(), name: name.into(), channel: channel.into() }
    }

    #[tokio::test]
    async fn create_generates_valid_code() {
        let store = Arc::new(InMemoryStore::new());
        let user = onboarded(&store).await;
        let handler = QrCodeHandler::new(store.clone(), store);

        let qr = handler.create(create(&user, "Truck #1", "vehicle")).await.unwrap();

        assert!(is_valid_code(&qr.code));
        assert_eq!(qr.channel, Channel::Vehicle);
        assert_eq!(qr.status, QrCodeStatus::Active);
        assert_eq!(qr.total_scans, 0);
    }

    #[tokio::test]
    async fn create_validates_input() {
        let store = Arc::new(InMemoryStore::new());
        let user = onboarded(&store).await;
        let handler = QrCodeHandler::new(store.clone(), store);

        let err = handler.create(create(&user, "Truck", "billboard")).await.unwrap_err();
        assert_eq!(err.details.get("field").map(String::as_str), Some("channel"));

        let err = handler.create(create(&user, "  ", "vehicle")).await.unwrap_err();
        assert_eq!(err.details.get("field").map(String::as_str), Some("name"));
    }

    #[tokio::test]
    async fn codes_are_scoped_to_company() {
        let store = Arc::new(InMemoryStore::new());
        let owner = onboarded(&store).await;
        let other = onboarded(&store).await;
        let handler = QrCodeHandler::new(store.clone(), store);

        let qr = handler.create(create(&owner, "Truck", "vehicle")).await.unwrap();

        assert_eq!(handler.list(&owner).await.unwrap().len(), 1);
        assert!(handler.list(&other).await.unwrap().is_empty());
        let err = handler.get(&other, &qr.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::QrCodeNotFound);
    }

    #[tokio::test]
    async fn pause_and_resume() {
        let store = Arc::new(InMemoryStore::new());
        let user = onboarded(&store).await;
        let handler = QrCodeHandler::new(store.clone(), store.clone());
        let qr = handler.create(create(&user, "Sign", "job_site")).await.unwrap();

        let paused = handler
            .update_status(UpdateQrCodeStatusCommand { user: user.clone(), qr_code_id: qr.id, status: "paused".into() })
            .await
            .unwrap();
        assert_eq!(paused.status, QrCodeStatus::Paused);
        assert!(store.find_active_by_code(&qr.code).await.unwrap().is_none());

        let err = handler
            .update_status(UpdateQrCodeStatusCommand { user: user.clone(), qr_code_id: qr.id, status: "deleted".into() })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let resumed = handler
            .update_status(UpdateQrCodeStatusCommand { user, qr_code_id: qr.id, status: "active".into() })
            .await
            .unwrap();
        assert!(resumed.is_active());
    }
}
