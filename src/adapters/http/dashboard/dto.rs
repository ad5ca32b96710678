//! HTTP DTOs for the dashboard endpoint.

use serde::Serialize;

use crate::domain::dashboard::{LeadSummary, TenantDashboard};

use super::super::qr_codes::dto::QrCodeResponse;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub total_leads: i64,
    pub total_scans: i64,
    pub conversion_rate: String,
    pub active_qr_codes: usize,
    pub total_qr_codes: usize,
    pub recent_leads: Vec<LeadSummary>,
    pub qr_codes: Vec<QrCodeResponse>,
}

impl DashboardResponse {
    pub fn new(dashboard: TenantDashboard, public_url: &str) -> Self {
        Self {
            total_leads: dashboard.total_leads,
            total_scans: dashboard.total_scans,
            conversion_rate: dashboard.conversion_rate,
            active_qr_codes: dashboard.active_qr_codes,
            total_qr_codes: dashboard.total_qr_codes,
            recent_leads: dashboard.recent_leads,
            qr_codes: dashboard
                .qr_codes
                .into_iter()
                .map(|qr| QrCodeResponse::new(qr, public_url))
                .collect(),
        }
    }
}
