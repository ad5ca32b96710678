//! Company handlers: onboarding and chatbot configuration.

mod configure;
mod get_company;
mod onboard;

pub use configure::{
    FaqInput, ReplaceFaqsCommand, ReplaceFaqsHandler, ReplaceServicesCommand,
    ReplaceServicesHandler, UpdateChatbotCommand, UpdateChatbotHandler,
};
pub use get_company::{CompanyProfile, GetCompanyHandler};
pub use onboard::{OnboardCompanyCommand, OnboardCompanyHandler, OnboardCompanyResult};
