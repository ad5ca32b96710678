//! Company module - Tenants, their chatbot configuration and membership.

mod company;
mod member;
mod service;
mod slug;

pub use company::{
    Branding, ChatbotSettings, Company, CompanySettings, CompanyStatus, NewCompany,
    DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, DEFAULT_TONE,
};
pub use member::{CompanyMember, MemberRole};
pub use service::{build_services, Faq, Service, ServiceDraft};
pub use slug::{company_slug, slugify};
