//! HTTP DTOs for QR code endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::qr_code::{Channel, QrCode, QrCodeStatus};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQrCodeRequest {
    pub name: String,
    pub channel: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQrCodeRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCodeResponse {
    pub id: String,
    pub name: String,
    pub code: String,
    pub url: String,
    pub channel: Channel,
    pub channel_label: String,
    pub status: QrCodeStatus,
    pub total_scans: i64,
    pub total_leads: i64,
    pub last_scan_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl QrCodeResponse {
    pub fn new(qr: QrCode, public_url: &str) -> Self {
        Self {
            id: qr.id.to_string(),
            url: qr.public_url(public_url),
            channel_label: qr.channel.label(),
            name: qr.name,
            code: qr.code,
            channel: qr.channel,
            status: qr.status,
            total_scans: qr.total_scans,
            total_leads: qr.total_leads,
            last_scan_at: qr.last_scan_at,
            created_at: qr.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CompanyId;

    #[test]
    fn response_carries_public_link_and_label() {
        let qr = QrCode::new(CompanyId::new(), "Van #1", Channel::JobSite, "ab3kx9mp".to_string(), Timestamp::now()).unwrap();
        let response = QrCodeResponse::new(qr, "https://tapzilla.example/");
        assert_eq!(response.url, "https://tapzilla.example/c/ab3kx9mp");
        assert_eq!(response.channel_label, "job site");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["channel"], "job_site");
        assert_eq!(json["status"], "active");
    }
}
