//! Lead module - Captured prospects and their follow-up status.

mod lead;

pub use lead::{Lead, LeadStatus};
