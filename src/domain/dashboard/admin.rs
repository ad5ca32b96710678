//! Platform admin read models.

use serde::Serialize;

use crate::domain::company::CompanyStatus;
use crate::domain::foundation::{CompanyId, LeadId, Timestamp};
use crate::domain::lead::LeadStatus;

pub const ADMIN_RECENT_COMPANIES: usize = 10;
pub const ADMIN_RECENT_LEADS: usize = 100;
pub const SCAN_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanySummary {
    pub id: CompanyId,
    pub name: String,
    pub slug: String,
    pub city: String,
    pub state: String,
    pub industry_name: Option<String>,
    pub status: CompanyStatus,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminOverview {
    pub total_companies: i64,
    pub active_companies: i64,
    /// Sum of billed amounts of billed leads, in cents.
    pub total_revenue_cents: i64,
    pub pending_leads: i64,
    pub scans_last_30_days: i64,
    pub recent_companies: Vec<CompanySummary>,
}

/// A lead across tenants with its company and source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminLeadRow {
    pub id: LeadId,
    pub company_id: CompanyId,
    pub company_name: String,
    pub qr_code_name: Option<String>,
    pub first_name: Option<String>,
    pub phone: String,
    pub service: Option<String>,
    pub status: LeadStatus,
    pub billed: bool,
    pub billed_amount_cents: i64,
    pub created_at: Timestamp,
}
