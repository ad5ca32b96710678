//! Chatbot configuration handlers: branding and settings, services, FAQs.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::company::{
    build_services, Branding, ChatbotSettings, CompanySettings, Faq, Service, ServiceDraft,
};
use crate::domain::foundation::{AuthenticatedUser, DomainError, ValidationError};
use crate::ports::CompanyRepository;

use crate::application::handlers::access::require_membership;
use super::get_company::{load_profile, CompanyProfile};

#[derive(Debug, Clone)]
pub struct UpdateChatbotCommand {
    pub user: AuthenticatedUser,
    pub branding: Branding,
    pub chatbot: ChatbotSettings,
    pub lead_email: Option<String>,
}

pub struct UpdateChatbotHandler {
    companies: Arc<dyn CompanyRepository>,
}

impl UpdateChatbotHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    pub async fn handle(&self, cmd: UpdateChatbotCommand) -> Result<CompanyProfile, DomainError> {
        let member = require_membership(self.companies.as_ref(), &cmd.user).await?;
        cmd.branding.validate()?;
        let lead_email = match cmd.lead_email.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(email) if email.contains('@') => Some(email.to_lowercase()),
            Some(_) => {
                return Err(ValidationError::invalid_format("lead_email", "Invalid email address").into())
            }
        };

        let mut profile = load_profile(self.companies.as_ref(), &member.company_id).await?;
        profile.company.branding = cmd.branding;
        profile.company.chatbot = cmd.chatbot;
        self.companies.update_profile(&profile.company).await?;

        let settings = CompanySettings {
            company_id: member.company_id,
            lead_email,
        };
        self.companies.save_settings(&settings).await?;
        profile.settings = settings;

        tracing::info!(company_id = %member.company_id, "Chatbot settings updated");
        Ok(profile)
    }
}

#[derive(Debug, Clone)]
pub struct ReplaceServicesCommand {
    pub user: AuthenticatedUser,
    pub services: Vec<ServiceDraft>,
}

pub struct ReplaceServicesHandler {
    companies: Arc<dyn CompanyRepository>,
}

impl ReplaceServicesHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    pub async fn handle(&self, cmd: ReplaceServicesCommand) -> Result<Vec<Service>, DomainError> {
        let member = require_membership(self.companies.as_ref(), &cmd.user).await?;
        let services = build_services(member.company_id, cmd.services)?;
        self.companies.replace_services(&member.company_id, &services).await?;
        Ok(services)
    }
}

/// One FAQ entry as submitted; position becomes sort order.
#[derive(Debug, Clone, Deserialize)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone)]
pub struct ReplaceFaqsCommand {
    pub user: AuthenticatedUser,
    pub faqs: Vec<FaqInput>,
}

pub struct ReplaceFaqsHandler {
    companies: Arc<dyn CompanyRepository>,
}

impl ReplaceFaqsHandler {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    pub async fn handle(&self, cmd: ReplaceFaqsCommand) -> Result<Vec<Faq>, DomainError> {
        let member = require_membership(self.companies.as_ref(), &cmd.user).await?;
        let faqs = cmd
            .faqs
            .iter()
            .enumerate()
            .map(|(i, f)| Faq::new(&f.question, &f.answer, i as i32))
            .collect::<Result<Vec<_>, _>>()?;
        self.companies.replace_faqs(&member.company_id, &faqs).await?;
        Ok(faqs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::application::handlers::company::{
        GetCompanyHandler, OnboardCompanyCommand, OnboardCompanyHandler,
    };
    use crate::domain::foundation::{ErrorCode, UserId};

    async fn onboarded() -> (Arc<InMemoryStore>, AuthenticatedUser) {
        let store = Arc::new(InMemoryStore::new());
        let user = AuthenticatedUser::new(UserId::new(), "owner@example.com");
        OnboardCompanyHandler::new(store.clone())
            .handle(OnboardCompanyCommand {
                user: user.clone(),
                company_name: "Pro Carpet Care".into(),
                phone: "555-0100".into(),
                city: "Denver".into(),
                state: "CO".into(),
                industry: "carpet-cleaning".into(),
            })
            .await
            .unwrap();
        (store, user)
    }

    #[tokio::test]
    async fn update_chatbot_persists_branding_and_lead_email() {
        let (store, user) = onboarded().await;

        let profile = UpdateChatbotHandler::new(store.clone())
            .handle(UpdateChatbotCommand {
                user: user.clone(),
                branding: Branding {
                    tagline: Some("Clean carpets".into()),
                    primary_color: Some("#00AA00".into()),
                    ..Default::default()
                },
                chatbot: ChatbotSettings {
                    tone: Some("professional".into()),
                    show_pricing: true,
                    ..Default::default()
                },
                lead_email: Some("Leads@ProCarpet.example".into()),
            })
            .await
            .unwrap();

        assert_eq!(profile.settings.lead_email.as_deref(), Some("leads@procarpet.example"));

        let reloaded = GetCompanyHandler::new(store).handle(&user).await.unwrap();
        assert_eq!(reloaded.company.branding.tagline.as_deref(), Some("Clean carpets"));
        assert!(reloaded.company.chatbot.show_pricing);
        assert_eq!(reloaded.settings.lead_email.as_deref(), Some("leads@procarpet.example"));
    }

    #[tokio::test]
    async fn bad_color_is_rejected() {
        let (store, user) = onboarded().await;

        let err = UpdateChatbotHandler::new(store)
            .handle(UpdateChatbotCommand {
                user,
                branding: Branding {
                    primary_color: Some("orange".into()),
                    ..Default::default()
                },
                chatbot: ChatbotSettings::default(),
                lead_email: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn services_replace_in_given_order() {
        let (store, user) = onboarded().await;
        let handler = ReplaceServicesHandler::new(store.clone());

        let drafts = vec![
            ServiceDraft { name: "Carpet".into(), price_min: Some(100), price_max: Some(200), is_active: true, ..Default::default() },
            ServiceDraft { name: "Tile".into(), is_active: false, ..Default::default() },
        ];
        handler.handle(ReplaceServicesCommand { user: user.clone(), services: drafts }).await.unwrap();

        let profile = GetCompanyHandler::new(store.clone()).handle(&user).await.unwrap();
        let names: Vec<_> = profile.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Carpet", "Tile"]);
        assert_eq!(store.active_services(&profile.company.id).await.unwrap().len(), 1);

        let err = handler
            .handle(ReplaceServicesCommand {
                user,
                services: vec![ServiceDraft { name: "Bad".into(), price_min: Some(300), price_max: Some(100), ..Default::default() }],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn faqs_require_question_and_answer() {
        let (store, user) = onboarded().await;
        let handler = ReplaceFaqsHandler::new(store);

        let faqs = handler
            .handle(ReplaceFaqsCommand {
                user: user.clone(),
                faqs: vec![FaqInput { question: "Pets?".into(), answer: "Pet safe.".into() }],
            })
            .await
            .unwrap();
        assert_eq!(faqs[0].sort_order, 0);

        let err = handler
            .handle(ReplaceFaqsCommand {
                user,
                faqs: vec![FaqInput { question: "Pets?".into(), answer: " ".into() }],
            })
            .await
            .unwrap_err();
        assert_eq!(err.details.get("field").map(String::as_str), Some("answer"));
    }

    #[tokio::test]
    async fn caller_without_company_is_rejected() {
        let store = Arc::new(InMemoryStore::new());
        let stranger = AuthenticatedUser::new(UserId::new(), "x@example.com");

        let err = ReplaceFaqsHandler::new(store)
            .handle(ReplaceFaqsCommand { user: stranger, faqs: vec![] })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CompanyNotFound);
    }
}
