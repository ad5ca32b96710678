//! Tapzilla - Lead generation for home-service businesses.
//!
//! Each business gets a branded AI chatbot behind QR/NFC codes placed on
//! trucks, job sites and handouts. The chatbot qualifies visitors, captures
//! their contact details as leads and notifies the business.
//!
//! Layout follows ports and adapters:
//! - `domain` - Pure business rules
//! - `ports` - Traits the application depends on
//! - `application` - Command and query handlers
//! - `adapters` - Postgres, OpenAI, Resend, JWT and the axum API
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
