//! HTTP DTOs for admin endpoints.
//!
//! The admin read models already serialize, so responses reuse them.

pub use crate::domain::dashboard::{AdminLeadRow, AdminOverview, CompanySummary};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCompanyStatusRequest {
    pub status: String,
}
