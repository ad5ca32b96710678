//! Platform admin handlers.

mod platform;

pub use platform::{AdminHandler, UpdateCompanyStatusCommand};
