//! Shared state handed to every route module.

use std::sync::Arc;

use crate::application::handlers::{
    AdminHandler, ChatSettings, ForgotPasswordHandler, GetAccountHandler, GetCompanyHandler,
    GetDashboardHandler, LeadHandler, OnboardCompanyHandler, OpenChatbotHandler, QrCodeHandler,
    ReplaceFaqsHandler, ReplaceServicesHandler, ResetPasswordHandler, SendChatMessageHandler,
    SignInHandler, SignUpHandler, UpdateChatbotHandler,
};
use crate::ports::{
    AIProvider, AdminReader, CompanyRepository, ConversationRepository, LeadRepository, Notifier,
    PasswordHasher, QrCodeRepository, SessionValidator, TokenIssuer, UserRepository,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; every field is an `Arc` so handlers are built on
/// demand without copying adapters.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub companies: Arc<dyn CompanyRepository>,
    pub qr_codes: Arc<dyn QrCodeRepository>,
    pub conversations: Arc<dyn ConversationRepository>,
    pub leads: Arc<dyn LeadRepository>,
    pub admin_reader: Arc<dyn AdminReader>,
    pub ai: Arc<dyn AIProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub sessions: Arc<dyn SessionValidator>,
    pub chat: ChatSettings,
}

impl AppState {
    /// Base URL of the public site, used for QR links and emails.
    pub fn public_url(&self) -> &str {
        &self.chat.public_url
    }

    pub fn send_chat_message_handler(&self) -> SendChatMessageHandler {
        SendChatMessageHandler::new(
            self.companies.clone(),
            self.conversations.clone(),
            self.qr_codes.clone(),
            self.ai.clone(),
            self.notifier.clone(),
            self.chat.clone(),
        )
    }

    pub fn open_chatbot_handler(&self) -> OpenChatbotHandler {
        OpenChatbotHandler::new(self.qr_codes.clone(), self.companies.clone())
    }

    pub fn sign_up_handler(&self) -> SignUpHandler {
        SignUpHandler::new(self.users.clone(), self.password_hasher.clone(), self.tokens.clone())
    }

    pub fn sign_in_handler(&self) -> SignInHandler {
        SignInHandler::new(self.users.clone(), self.password_hasher.clone(), self.tokens.clone())
    }

    pub fn forgot_password_handler(&self) -> ForgotPasswordHandler {
        ForgotPasswordHandler::new(
            self.users.clone(),
            self.tokens.clone(),
            self.notifier.clone(),
            self.public_url(),
        )
    }

    pub fn reset_password_handler(&self) -> ResetPasswordHandler {
        ResetPasswordHandler::new(self.users.clone(), self.password_hasher.clone(), self.tokens.clone())
    }

    pub fn get_account_handler(&self) -> GetAccountHandler {
        GetAccountHandler::new(self.users.clone(), self.companies.clone())
    }

    pub fn onboard_company_handler(&self) -> OnboardCompanyHandler {
        OnboardCompanyHandler::new(self.companies.clone())
    }

    pub fn get_company_handler(&self) -> GetCompanyHandler {
        GetCompanyHandler::new(self.companies.clone())
    }

    pub fn update_chatbot_handler(&self) -> UpdateChatbotHandler {
        UpdateChatbotHandler::new(self.companies.clone())
    }

    pub fn replace_services_handler(&self) -> ReplaceServicesHandler {
        ReplaceServicesHandler::new(self.companies.clone())
    }

    pub fn replace_faqs_handler(&self) -> ReplaceFaqsHandler {
        ReplaceFaqsHandler::new(self.companies.clone())
    }

    pub fn qr_code_handler(&self) -> QrCodeHandler {
        QrCodeHandler::new(self.companies.clone(), self.qr_codes.clone())
    }

    pub fn lead_handler(&self) -> LeadHandler {
        LeadHandler::new(self.companies.clone(), self.leads.clone())
    }

    pub fn dashboard_handler(&self) -> GetDashboardHandler {
        GetDashboardHandler::new(self.companies.clone(), self.qr_codes.clone(), self.leads.clone())
    }

    pub fn admin_handler(&self) -> AdminHandler {
        AdminHandler::new(self.companies.clone(), self.admin_reader.clone())
    }
}
