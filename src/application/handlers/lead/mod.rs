//! Lead inbox handlers.

mod manage;

pub use manage::{LeadHandler, UpdateLeadStatusCommand};
