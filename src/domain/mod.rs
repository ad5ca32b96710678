//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machines)
//! - `catalog` - Industries, pricing tiers and add-ons
//! - `account` - Users and credential rules
//! - `company` - Tenants, branding, services and FAQs
//! - `chatbot` - Prompt building, lead detection and conversations
//! - `qr_code` - Codes, channels and scans
//! - `lead` - Captured leads and their pipeline
//! - `dashboard` - Tenant and admin read models

pub mod account;
pub mod catalog;
pub mod chatbot;
pub mod company;
pub mod dashboard;
pub mod foundation;
pub mod lead;
pub mod qr_code;
