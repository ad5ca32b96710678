//! Dashboard module - Read models for the tenant and admin dashboards.

mod admin;
mod tenant;

pub use admin::{
    AdminLeadRow, AdminOverview, CompanySummary, ADMIN_RECENT_COMPANIES, ADMIN_RECENT_LEADS,
    SCAN_WINDOW_DAYS,
};
pub use tenant::{
    conversion_rate, LeadSummary, TenantDashboard, DASHBOARD_LIST_LIMIT,
};
