//! HTTP adapter for the caller's company.
//!
//! - `POST /api/onboarding` - Create the caller's company
//! - `GET /api/company` - Profile, chatbot settings, services and FAQs
//! - `PUT /api/company/chatbot` - Branding and chatbot behaviour
//! - `PUT /api/company/services` - Replace the service list
//! - `PUT /api/company/faqs` - Replace the FAQ list

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{company_routes, onboarding_routes};
