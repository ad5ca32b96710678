//! Account module - Registered users and credential rules.

mod credentials;
mod user;

pub use credentials::{validate_email, validate_new_password, MIN_PASSWORD_LENGTH};
pub use user::{User, DASHBOARD_PATH, ONBOARDING_PATH};
