//! QR code aggregate and its scan log.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CompanyId, QrCodeId, StateMachine, Timestamp, ValidationError};

/// Where a code is physically placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Vehicle,
    JobSite,
    Partner,
    Handout,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Vehicle, Channel::JobSite, Channel::Partner, Channel::Handout];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Vehicle => "vehicle",
            Channel::JobSite => "job_site",
            Channel::Partner => "partner",
            Channel::Handout => "handout",
        }
    }

    /// Display label, e.g. "job site".
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn parse(s: &str) -> Option<Self> {
        Channel::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QrCodeStatus {
    #[default]
    Active,
    Paused,
}

impl QrCodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QrCodeStatus::Active => "active",
            QrCodeStatus::Paused => "paused",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(QrCodeStatus::Active),
            "paused" => Some(QrCodeStatus::Paused),
            _ => None,
        }
    }
}

impl StateMachine for QrCodeStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        self != target
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            QrCodeStatus::Active => vec![QrCodeStatus::Paused],
            QrCodeStatus::Paused => vec![QrCodeStatus::Active],
        }
    }
}

/// A printed or encoded entry point for one company's chatbot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrCode {
    pub id: QrCodeId,
    pub company_id: CompanyId,
    pub name: String,
    pub code: String,
    pub channel: Channel,
    pub status: QrCodeStatus,
    pub total_scans: i64,
    pub total_leads: i64,
    pub last_scan_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl QrCode {
    pub fn new(
        company_id: CompanyId,
        name: &str,
        channel: Channel,
        code: String,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: QrCodeId::new(),
            company_id,
            name: name.to_string(),
            code,
            channel,
            status: QrCodeStatus::Active,
            total_scans: 0,
            total_leads: 0,
            last_scan_at: None,
            created_at: now,
        })
    }

    /// Public chat URL encoded into the code.
    pub fn public_url(&self, base_url: &str) -> String {
        format!("{}/c/{}", base_url.trim_end_matches('/'), self.code)
    }

    pub fn is_active(&self) -> bool {
        self.status == QrCodeStatus::Active
    }
}

/// One visit to a code's chat page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    pub qr_code_id: QrCodeId,
    pub company_id: CompanyId,
    pub scanned_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_labels() {
        assert_eq!(Channel::JobSite.label(), "job site");
        assert_eq!(Channel::Vehicle.label(), "vehicle");
        assert_eq!(Channel::parse("handout"), Some(Channel::Handout));
        assert_eq!(Channel::parse("billboard"), None);
    }

    #[test]
    fn new_code_starts_active_with_zero_totals() {
        let qr = QrCode::new(CompanyId::new(), " Truck 1 ", Channel::Vehicle, "k7m2p9xq".into(), Timestamp::now()).unwrap();
        assert_eq!(qr.name, "Truck 1");
        assert!(qr.is_active());
        assert_eq!((qr.total_scans, qr.total_leads), (0, 0));
        assert_eq!(qr.public_url("https://tapzilla.com/"), "https://tapzilla.com/c/k7m2p9xq");
    }

    #[test]
    fn blank_name_rejected() {
        assert!(QrCode::new(CompanyId::new(), "  ", Channel::Partner, "k7m2p9xq".into(), Timestamp::now()).is_err());
    }

    #[test]
    fn status_toggles() {
        assert_eq!(QrCodeStatus::Active.transition_to(QrCodeStatus::Paused).unwrap(), QrCodeStatus::Paused);
        assert!(QrCodeStatus::Paused.transition_to(QrCodeStatus::Paused).is_err());
        assert_eq!(QrCodeStatus::parse("paused"), Some(QrCodeStatus::Paused));
    }
}
