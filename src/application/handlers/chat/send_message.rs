//! SendChatMessageHandler - One visitor turn against a company's chatbot.
//!
//! Flow: validate the transcript, load the company, the session and the
//! company's services/FAQs, build the system prompt, call the model once,
//! strip the lead-capture marker and save the conversation. On the
//! session's first capture the conversation is completed together with
//! the lead, then the company is notified.

use std::sync::Arc;

use crate::domain::chatbot::{
    build_system_prompt, detect_lead_capture, extract_lead_details, validate_transcript,
    ChatMessage, Conversation,
};
use crate::domain::company::Company;
use crate::domain::foundation::{
    ChatSessionId, CompanyId, DomainError, ErrorCode, QrCodeId, Timestamp,
};
use crate::domain::lead::Lead;
use crate::ports::{
    AIProvider, CompanyRepository, CompletionRequest, ConversationRepository, LeadNotification,
    Notifier, QrCodeRepository, RequestMetadata,
};

/// Generation parameters for chatbot replies.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub max_tokens: u32,
    pub temperature: f32,
    /// Base URL used in links inside notifications.
    pub public_url: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            temperature: 0.7,
            public_url: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub company_id: CompanyId,
    pub qr_code_id: Option<QrCodeId>,
    pub session_id: ChatSessionId,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendChatMessageResult {
    pub message: String,
    pub lead_captured: bool,
}

pub struct SendChatMessageHandler {
    companies: Arc<dyn CompanyRepository>,
    conversations: Arc<dyn ConversationRepository>,
    qr_codes: Arc<dyn QrCodeRepository>,
    ai: Arc<dyn AIProvider>,
    notifier: Arc<dyn Notifier>,
    settings: ChatSettings,
}

impl SendChatMessageHandler {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        conversations: Arc<dyn ConversationRepository>,
        qr_codes: Arc<dyn QrCodeRepository>,
        ai: Arc<dyn AIProvider>,
        notifier: Arc<dyn Notifier>,
        settings: ChatSettings,
    ) -> Self {
        Self {
            companies,
            conversations,
            qr_codes,
            ai,
            notifier,
            settings,
        }
    }

    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<SendChatMessageResult, DomainError> {
        validate_transcript(&cmd.messages)?;

        let company = self
            .companies
            .find_by_id(&cmd.company_id)
            .await?
            .filter(Company::is_active)
            .ok_or_else(|| DomainError::new(ErrorCode::CompanyNotFound, "Company not found"))?;

        let mut conversation = match self.conversations.find_by_session(&cmd.session_id).await? {
            Some(existing) if existing.company_id != company.id => {
                tracing::warn!(
                    company_id = %company.id,
                    session_id = %cmd.session_id,
                    "Chat session belongs to another company"
                );
                return Err(DomainError::validation("session_id", "Unknown chat session"));
            }
            Some(existing) => existing,
            None => {
                let qr_code_id = self.owned_qr_code(&company, cmd.qr_code_id).await?;
                Conversation::start(company.id, qr_code_id, cmd.session_id, Timestamp::now())
            }
        };

        let (services, faqs) = tokio::join!(
            self.companies.active_services(&company.id),
            self.companies.faqs(&company.id)
        );
        let system_prompt = build_system_prompt(&company, company.industry_name(), &services?, &faqs?);

        let request = CompletionRequest::new(RequestMetadata::new(
            company.id,
            cmd.session_id,
            uuid::Uuid::new_v4().to_string(),
        ))
        .with_system_prompt(system_prompt)
        .with_transcript(&cmd.messages)
        .with_max_tokens(self.settings.max_tokens)
        .with_temperature(self.settings.temperature);

        let response = self.ai.complete(request).await.map_err(|e| {
            tracing::error!(company_id = %company.id, error = %e, "Chat completion failed");
            DomainError::new(ErrorCode::AIProviderError, "Failed to process chat")
        })?;

        let outcome = detect_lead_capture(&response.content);
        let now = Timestamp::now();

        let first_capture =
            conversation.record_exchange(cmd.messages, &outcome.message, outcome.lead_captured, now);
        if first_capture {
            self.capture_lead(&company, &conversation, now).await?;
        } else {
            self.conversations.upsert(&conversation).await?;
        }

        Ok(SendChatMessageResult {
            message: outcome.message,
            lead_captured: outcome.lead_captured,
        })
    }

    /// Keeps the visitor-supplied QR code only when it is one of the
    /// company's own codes.
    async fn owned_qr_code(
        &self,
        company: &Company,
        qr_code_id: Option<QrCodeId>,
    ) -> Result<Option<QrCodeId>, DomainError> {
        let Some(id) = qr_code_id else {
            return Ok(None);
        };
        match self.qr_codes.find_by_id(&id).await? {
            Some(qr) if qr.company_id == company.id => Ok(Some(qr.id)),
            _ => {
                tracing::warn!(company_id = %company.id, qr_code_id = %id, "Ignoring QR code from another company");
                Ok(None)
            }
        }
    }

    async fn capture_lead(
        &self,
        company: &Company,
        conversation: &Conversation,
        now: Timestamp,
    ) -> Result<(), DomainError> {
        let details = extract_lead_details(&conversation.messages);
        let lead = Lead::capture(
            company.id,
            conversation.qr_code_id,
            conversation.id,
            details,
            company.price_per_lead_cents(),
            now,
        );
        if lead.is_none() {
            tracing::warn!(
                conversation_id = %conversation.id,
                "Lead marker received but no phone number found in transcript"
            );
        }

        if !self.conversations.complete_with_lead(conversation, lead.as_ref()).await? {
            tracing::debug!(conversation_id = %conversation.id, "Session already completed");
            return Ok(());
        }
        let Some(lead) = lead else {
            return Ok(());
        };
        tracing::info!(company_id = %company.id, lead_id = %lead.id, "Lead captured");

        self.notify(company, lead).await;
        Ok(())
    }

    async fn notify(&self, company: &Company, lead: Lead) {
        let to = match self.companies.settings(&company.id).await {
            Ok(settings) => settings.and_then(|s| s.lead_email).or_else(|| company.email.clone()),
            Err(e) => {
                tracing::warn!(company_id = %company.id, error = %e, "Could not load company settings");
                company.email.clone()
            }
        };
        let Some(to) = to else {
            return;
        };

        let notification = LeadNotification {
            to,
            company_name: company.name.clone(),
            dashboard_url: format!("{}/dashboard/leads", self.settings.public_url.trim_end_matches('/')),
            lead,
        };
        if let Err(e) = self.notifier.notify_lead_captured(&notification).await {
            tracing::warn!(
                company_id = %company.id,
                lead_id = %notification.lead.id,
                error = %e,
                "Lead notification failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::company::{CompanyMember, CompanySettings, CompanyStatus, NewCompany};
    use crate::domain::foundation::UserId;
    use crate::domain::qr_code::{Channel, QrCode};
    use crate::ports::NotificationError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<LeadNotification>>,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify_lead_captured(&self, notification: &LeadNotification) -> Result<(), NotificationError> {
            self.sent.lock().unwrap().push(notification.clone());
            if self.fail {
                return Err(NotificationError::Transport("connection refused".into()));
            }
            Ok(())
        }

        async fn send_password_reset(&self, _to: &str, _reset_link: &str) -> Result<(), NotificationError> {
            Ok(())
        }
    }

    struct Fixture {
        store: InMemoryStore,
        company: Company,
        qr: QrCode,
    }

    async fn fixture() -> Fixture {
        let store = InMemoryStore::new();
        let details = NewCompany::parse("Pro Carpet Care", "555-0100", "Denver", "CO", "carpet-cleaning").unwrap();
        let company = Company::register(details, "owner@example.com", Timestamp::now());
        let settings = CompanySettings {
            company_id: company.id,
            lead_email: Some("leads@procarpet.example".into()),
        };
        store
            .create_with_owner(&company, &CompanyMember::owner(UserId::new(), company.id), &settings)
            .await
            .unwrap();
        let qr = QrCode::new(company.id, "Van", Channel::Vehicle, "k7m2p9xq".into(), Timestamp::now()).unwrap();
        QrCodeRepository::insert(&store, &qr).await.unwrap();
        Fixture { store, company, qr }
    }

    fn handler(f: &Fixture, ai: MockAIProvider, notifier: Arc<RecordingNotifier>) -> SendChatMessageHandler {
        let store = Arc::new(f.store.clone());
        SendChatMessageHandler::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(ai),
            notifier,
            ChatSettings::default(),
        )
    }

    async fn second_company(store: &InMemoryStore) -> (Company, QrCode) {
        let details = NewCompany::parse("Summit Roofing", "555-0200", "Boulder", "CO", "roofing").unwrap();
        let company = Company::register(details, "boss@summit.example", Timestamp::now());
        let settings = CompanySettings { company_id: company.id, lead_email: None };
        store
            .create_with_owner(&company, &CompanyMember::owner(UserId::new(), company.id), &settings)
            .await
            .unwrap();
        let qr = QrCode::new(company.id, "Yard sign", Channel::JobSite, "r4ft8mnq".into(), Timestamp::now()).unwrap();
        QrCodeRepository::insert(store, &qr).await.unwrap();
        (company, qr)
    }

    /// Fails the next lead write, then behaves like the store.
    struct FlakyCaptures {
        store: InMemoryStore,
        fail_next: AtomicBool,
    }

    #[async_trait]
    impl ConversationRepository for FlakyCaptures {
        async fn find_by_session(&self, session_id: &ChatSessionId) -> Result<Option<Conversation>, DomainError> {
            self.store.find_by_session(session_id).await
        }

        async fn upsert(&self, conversation: &Conversation) -> Result<(), DomainError> {
            self.store.upsert(conversation).await
        }

        async fn complete_with_lead(
            &self,
            conversation: &Conversation,
            lead: Option<&Lead>,
        ) -> Result<bool, DomainError> {
            if self.fail_next.swap(false, Ordering::SeqCst) {
                return Err(DomainError::database("connection reset"));
            }
            self.store.complete_with_lead(conversation, lead).await
        }
    }

    fn command(f: &Fixture, session_id: ChatSessionId, messages: Vec<ChatMessage>) -> SendChatMessageCommand {
        SendChatMessageCommand {
            company_id: f.company.id,
            qr_code_id: Some(f.qr.id),
            session_id,
            messages,
        }
    }

    fn full_transcript() -> Vec<ChatMessage> {
        vec![
            ChatMessage::user("I need my carpets cleaned"),
            ChatMessage::assistant("Happy to help! What's your first name?"),
            ChatMessage::user("sarah"),
            ChatMessage::assistant("Thanks Sarah! Best phone number to reach you?"),
            ChatMessage::user("(555) 123-4567"),
        ]
    }

    #[tokio::test]
    async fn plain_reply_keeps_conversation_active() {
        let f = fixture().await;
        let ai = MockAIProvider::new().with_response("What service do you need?");
        let h = handler(&f, ai.clone(), Arc::new(RecordingNotifier::default()));
        let session = ChatSessionId::new();

        let result = h.handle(command(&f, session, vec![ChatMessage::user("hi")])).await.unwrap();

        assert_eq!(result.message, "What service do you need?");
        assert!(!result.lead_captured);
        let stored = f.store.find_by_session(&session).await.unwrap().unwrap();
        assert_eq!(stored.messages.len(), 2);
        assert!(!stored.is_completed());

        let call = &ai.get_calls()[0];
        assert_eq!(call.max_tokens, Some(300));
        assert_eq!(call.temperature, Some(0.7));
        assert!(call.system_prompt.as_deref().unwrap().contains("Pro Carpet Care"));
    }

    #[tokio::test]
    async fn capture_creates_lead_and_notifies() {
        let f = fixture().await;
        let ai = MockAIProvider::new().with_response("Got it! Someone will call you shortly. [LEAD_CAPTURED]");
        let notifier = Arc::new(RecordingNotifier::default());
        let h = handler(&f, ai, notifier.clone());
        let session = ChatSessionId::new();

        let result = h.handle(command(&f, session, full_transcript())).await.unwrap();

        assert!(result.lead_captured);
        assert_eq!(result.message, "Got it! Someone will call you shortly.");

        let leads = f.store.all_leads().await;
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].phone, "5551234567");
        assert_eq!(leads[0].first_name.as_deref(), Some("Sarah"));
        assert_eq!(leads[0].billed_amount_cents, 200);
        assert_eq!(leads[0].qr_code_id, Some(f.qr.id));

        let qr = QrCodeRepository::find_by_id(&f.store, &f.qr.id).await.unwrap().unwrap();
        assert_eq!(qr.total_leads, 1);

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "leads@procarpet.example");
        assert_eq!(sent[0].dashboard_url, "http://localhost:3000/dashboard/leads");
    }

    #[tokio::test]
    async fn second_capture_on_same_session_creates_no_lead() {
        let f = fixture().await;
        let ai = MockAIProvider::new()
            .with_response("Done! [LEAD_CAPTURED]")
            .with_response("Anything else? [LEAD_CAPTURED]");
        let h = handler(&f, ai, Arc::new(RecordingNotifier::default()));
        let session = ChatSessionId::new();

        h.handle(command(&f, session, full_transcript())).await.unwrap();
        let mut more = full_transcript();
        more.push(ChatMessage::assistant("Done!"));
        more.push(ChatMessage::user("thanks"));
        let result = h.handle(command(&f, session, more)).await.unwrap();

        assert!(result.lead_captured);
        assert_eq!(f.store.all_leads().await.len(), 1);
        let stored = f.store.find_by_session(&session).await.unwrap().unwrap();
        assert_eq!(stored.messages.len(), 8);
        assert!(stored.is_completed());
    }

    #[tokio::test]
    async fn capture_without_phone_completes_without_lead() {
        let f = fixture().await;
        let ai = MockAIProvider::new().with_response("Thanks! [LEAD_CAPTURED]");
        let h = handler(&f, ai, Arc::new(RecordingNotifier::default()));
        let session = ChatSessionId::new();

        let result = h
            .handle(command(&f, session, vec![ChatMessage::user("carpet cleaning please")]))
            .await
            .unwrap();

        assert!(result.lead_captured);
        assert!(f.store.all_leads().await.is_empty());
        assert!(f.store.find_by_session(&session).await.unwrap().unwrap().is_completed());
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_request() {
        let f = fixture().await;
        let ai = MockAIProvider::new().with_response("Great [LEAD_CAPTURED]");
        let notifier = Arc::new(RecordingNotifier { fail: true, ..Default::default() });
        let h = handler(&f, ai, notifier);

        let result = h.handle(command(&f, ChatSessionId::new(), full_transcript())).await;

        assert!(result.is_ok());
        assert_eq!(f.store.all_leads().await.len(), 1);
    }

    #[tokio::test]
    async fn invalid_transcript_is_rejected_before_ai_call() {
        let f = fixture().await;
        let ai = MockAIProvider::new();
        let h = handler(&f, ai.clone(), Arc::new(RecordingNotifier::default()));

        let err = h
            .handle(command(&f, ChatSessionId::new(), vec![ChatMessage::assistant("hello")]))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(ai.call_count(), 0);
    }

    #[tokio::test]
    async fn inactive_company_is_not_found() {
        let f = fixture().await;
        CompanyRepository::update_status(&f.store, &f.company.id, CompanyStatus::Suspended)
            .await
            .unwrap();
        let h = handler(&f, MockAIProvider::new(), Arc::new(RecordingNotifier::default()));

        let err = h
            .handle(command(&f, ChatSessionId::new(), vec![ChatMessage::user("hi")]))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CompanyNotFound);
    }

    #[tokio::test]
    async fn ai_failure_maps_to_generic_error() {
        let f = fixture().await;
        let ai = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
        let h = handler(&f, ai, Arc::new(RecordingNotifier::default()));

        let err = h
            .handle(command(&f, ChatSessionId::new(), vec![ChatMessage::user("hi")]))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::AIProviderError);
        assert_eq!(err.message, "Failed to process chat");
    }

    #[tokio::test]
    async fn session_of_another_company_is_rejected() {
        let f = fixture().await;
        let (other, _) = second_company(&f.store).await;
        let ai = MockAIProvider::new()
            .with_response("Done! [LEAD_CAPTURED]")
            .with_response("Sure [LEAD_CAPTURED]");
        let h = handler(&f, ai.clone(), Arc::new(RecordingNotifier::default()));
        let session = ChatSessionId::new();
        h.handle(command(&f, session, full_transcript())).await.unwrap();

        let mut replay = command(&f, session, vec![ChatMessage::user("call me at 303-555-0000")]);
        replay.company_id = other.id;
        let err = h.handle(replay).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(ai.call_count(), 1);
        let stored = f.store.find_by_session(&session).await.unwrap().unwrap();
        assert_eq!(stored.company_id, f.company.id);
        assert_eq!(stored.messages.len(), 6);
        assert_eq!(f.store.all_leads().await.len(), 1);
        let qr = QrCodeRepository::find_by_id(&f.store, &f.qr.id).await.unwrap().unwrap();
        assert_eq!(qr.total_leads, 1);
    }

    #[tokio::test]
    async fn qr_code_of_another_company_is_not_credited() {
        let f = fixture().await;
        let (_, foreign_qr) = second_company(&f.store).await;
        let ai = MockAIProvider::new()
            .with_response("Thanks [LEAD_CAPTURED]")
            .with_response("Thanks [LEAD_CAPTURED]");
        let h = handler(&f, ai, Arc::new(RecordingNotifier::default()));

        let mut foreign = command(&f, ChatSessionId::new(), full_transcript());
        foreign.qr_code_id = Some(foreign_qr.id);
        h.handle(foreign).await.unwrap();
        let mut unknown = command(&f, ChatSessionId::new(), full_transcript());
        unknown.qr_code_id = Some(QrCodeId::new());
        h.handle(unknown).await.unwrap();

        let leads = f.store.all_leads().await;
        assert_eq!(leads.len(), 2);
        assert!(leads.iter().all(|l| l.company_id == f.company.id && l.qr_code_id.is_none()));
        let qr = QrCodeRepository::find_by_id(&f.store, &foreign_qr.id).await.unwrap().unwrap();
        assert_eq!(qr.total_leads, 0);
    }

    #[tokio::test]
    async fn failed_lead_write_leaves_session_open_for_retry() {
        let f = fixture().await;
        let ai = MockAIProvider::new()
            .with_response("Great [LEAD_CAPTURED]")
            .with_response("Great [LEAD_CAPTURED]");
        let conversations = Arc::new(FlakyCaptures {
            store: f.store.clone(),
            fail_next: AtomicBool::new(true),
        });
        let store = Arc::new(f.store.clone());
        let h = SendChatMessageHandler::new(
            store.clone(),
            conversations,
            store,
            Arc::new(ai),
            Arc::new(RecordingNotifier::default()),
            ChatSettings::default(),
        );
        let session = ChatSessionId::new();

        let err = h.handle(command(&f, session, full_transcript())).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        let stored = f.store.find_by_session(&session).await.unwrap();
        assert!(stored.map_or(true, |c| !c.is_completed()));
        assert!(f.store.all_leads().await.is_empty());

        let result = h.handle(command(&f, session, full_transcript())).await.unwrap();
        assert!(result.lead_captured);
        assert_eq!(f.store.all_leads().await.len(), 1);
        assert!(f.store.find_by_session(&session).await.unwrap().unwrap().is_completed());
    }

    #[tokio::test]
    async fn concurrent_captures_on_one_session_record_one_lead() {
        let f = fixture().await;
        let ai = MockAIProvider::new()
            .with_response("Got it [LEAD_CAPTURED]")
            .with_response("Got it [LEAD_CAPTURED]");
        let notifier = Arc::new(RecordingNotifier::default());
        let h = handler(&f, ai, notifier.clone());
        let session = ChatSessionId::new();

        let (a, b) = tokio::join!(
            h.handle(command(&f, session, full_transcript())),
            h.handle(command(&f, session, full_transcript()))
        );

        assert!(a.unwrap().lead_captured);
        assert!(b.unwrap().lead_captured);
        assert_eq!(f.store.all_leads().await.len(), 1);
        let qr = QrCodeRepository::find_by_id(&f.store, &f.qr.id).await.unwrap().unwrap();
        assert_eq!(qr.total_leads, 1);
        assert_eq!(notifier.sent.lock().unwrap().len(), 1);
    }
}
