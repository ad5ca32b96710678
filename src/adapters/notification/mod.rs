//! Notification adapters.
//!
//! - `ResendNotifier` - Email through the Resend HTTP API
//! - `LoggingNotifier` - Logs instead of sending; used when email is disabled

mod logging;
mod resend;

pub use logging::LoggingNotifier;
pub use resend::{ResendConfig, ResendNotifier};
