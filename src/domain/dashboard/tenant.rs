//! Tenant dashboard read models.

use serde::Serialize;

use crate::domain::foundation::{LeadId, Timestamp};
use crate::domain::lead::LeadStatus;
use crate::domain::qr_code::{Channel, QrCode, QrCodeStatus};

/// How many recent items the dashboard shows.
pub const DASHBOARD_LIST_LIMIT: usize = 5;

/// Lead-per-scan percentage with one decimal, or `"0"` with no scans.
pub fn conversion_rate(leads: i64, scans: i64) -> String {
    if scans <= 0 {
        return "0".to_string();
    }
    format!("{:.1}", leads as f64 / scans as f64 * 100.0)
}

/// A lead row with its source code's name and channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSummary {
    pub id: LeadId,
    pub first_name: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub service: Option<String>,
    pub address: Option<String>,
    pub timeline: Option<String>,
    pub status: LeadStatus,
    pub qr_code_name: Option<String>,
    pub qr_code_channel: Option<Channel>,
    pub created_at: Timestamp,
}

/// Everything the tenant home screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantDashboard {
    pub total_leads: i64,
    pub total_scans: i64,
    pub conversion_rate: String,
    pub active_qr_codes: usize,
    pub total_qr_codes: usize,
    pub recent_leads: Vec<LeadSummary>,
    pub qr_codes: Vec<QrCode>,
}

impl TenantDashboard {
    /// Folds a company's codes (oldest first) and recent leads into the view.
    pub fn build(qr_codes: Vec<QrCode>, mut recent_leads: Vec<LeadSummary>) -> Self {
        let total_leads = qr_codes.iter().map(|q| q.total_leads).sum();
        let total_scans = qr_codes.iter().map(|q| q.total_scans).sum();
        let active_qr_codes = qr_codes
            .iter()
            .filter(|q| q.status == QrCodeStatus::Active)
            .count();
        let total_qr_codes = qr_codes.len();
        recent_leads.truncate(DASHBOARD_LIST_LIMIT);

        Self {
            total_leads,
            total_scans,
            conversion_rate: conversion_rate(total_leads, total_scans),
            active_qr_codes,
            total_qr_codes,
            recent_leads,
            qr_codes: qr_codes.into_iter().take(DASHBOARD_LIST_LIMIT).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CompanyId;

    fn qr(status: QrCodeStatus, scans: i64, leads: i64) -> QrCode {
        let mut qr = QrCode::new(CompanyId::new(), "Truck", Channel::Vehicle, "k7m2p9xq".into(), Timestamp::now()).unwrap();
        qr.status = status;
        qr.total_scans = scans;
        qr.total_leads = leads;
        qr
    }

    #[test]
    fn conversion_rate_formatting() {
        assert_eq!(conversion_rate(0, 0), "0");
        assert_eq!(conversion_rate(5, 0), "0");
        assert_eq!(conversion_rate(1, 3), "33.3");
        assert_eq!(conversion_rate(2, 8), "25.0");
        assert_eq!(conversion_rate(0, 10), "0.0");
    }

    #[test]
    fn build_totals_across_codes() {
        let codes = vec![
            qr(QrCodeStatus::Active, 10, 2),
            qr(QrCodeStatus::Paused, 30, 3),
            qr(QrCodeStatus::Active, 0, 0),
        ];
        let dashboard = TenantDashboard::build(codes, vec![]);
        assert_eq!(dashboard.total_scans, 40);
        assert_eq!(dashboard.total_leads, 5);
        assert_eq!(dashboard.conversion_rate, "12.5");
        assert_eq!((dashboard.active_qr_codes, dashboard.total_qr_codes), (2, 3));
    }

    #[test]
    fn build_caps_lists() {
        let codes = (0..8).map(|_| qr(QrCodeStatus::Active, 1, 0)).collect();
        let dashboard = TenantDashboard::build(codes, vec![]);
        assert_eq!(dashboard.qr_codes.len(), DASHBOARD_LIST_LIMIT);
        assert_eq!(dashboard.total_qr_codes, 8);
    }
}
