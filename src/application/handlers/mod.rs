//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod access;
pub mod account;
pub mod admin;
pub mod chat;
pub mod company;
pub mod dashboard;
pub mod lead;
pub mod qr_code;

pub use access::{require_membership, require_platform_admin};
pub use account::{
    AccountView, ForgotPasswordCommand, ForgotPasswordHandler, GetAccountHandler,
    ResetPasswordCommand, ResetPasswordHandler, SignInCommand, SignInHandler, SignUpCommand,
    SignUpHandler, SignUpResult,
};
pub use admin::{AdminHandler, UpdateCompanyStatusCommand};
pub use chat::{
    spawn_scan_recorder, ChatSettings, ChatbotMeta, ChatbotPage, OpenChatbotHandler,
    OpenChatbotQuery, SendChatMessageCommand, SendChatMessageHandler, SendChatMessageResult,
};
pub use company::{
    CompanyProfile, FaqInput, GetCompanyHandler, OnboardCompanyCommand, OnboardCompanyHandler,
    OnboardCompanyResult, ReplaceFaqsCommand, ReplaceFaqsHandler, ReplaceServicesCommand,
    ReplaceServicesHandler, UpdateChatbotCommand, UpdateChatbotHandler,
};
pub use dashboard::GetDashboardHandler;
pub use lead::{LeadHandler, UpdateLeadStatusCommand};
pub use qr_code::{CreateQrCodeCommand, QrCodeHandler, UpdateQrCodeStatusCommand};
