//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - Accounts and password hashes
//! - `CompanyRepository` - Tenants, membership, services and FAQs
//! - `QrCodeRepository` - QR codes and scan counters
//! - `ConversationRepository` - Chat transcripts keyed by widget session
//! - `LeadRepository` - Captured leads
//! - `AdminReader` - Cross-tenant read models for platform admins
//!
//! ## External Service Ports
//!
//! - `AIProvider` - LLM chat completions
//! - `Notifier` - Outbound email
//!
//! ## Auth Ports
//!
//! - `SessionValidator` - Bearer token verification
//! - `TokenIssuer` - Session and password-reset token minting
//! - `PasswordHasher` - Password hashing and verification

mod admin_reader;
mod ai_provider;
mod company_repository;
mod conversation_repository;
mod lead_repository;
mod notifier;
mod password_hasher;
mod qr_code_repository;
mod session_validator;
mod token_issuer;
mod user_repository;

pub use admin_reader::AdminReader;
pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use company_repository::CompanyRepository;
pub use conversation_repository::ConversationRepository;
pub use lead_repository::LeadRepository;
pub use notifier::{LeadNotification, NotificationError, Notifier};
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use qr_code_repository::QrCodeRepository;
pub use session_validator::SessionValidator;
pub use token_issuer::{IssuedToken, PasswordResetClaim, TokenIssuer};
pub use user_repository::UserRepository;
