//! HTTP DTOs for lead endpoints.
//!
//! List rows reuse the dashboard's `LeadSummary`, which already serializes.

pub use crate::domain::dashboard::LeadSummary;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::lead::{Lead, LeadStatus};

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLeadRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadResponse {
    pub id: String,
    pub qr_code_id: Option<String>,
    pub first_name: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub service: Option<String>,
    pub address: Option<String>,
    pub timeline: Option<String>,
    pub status: LeadStatus,
    pub created_at: Timestamp,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id.to_string(),
            qr_code_id: lead.qr_code_id.map(|id| id.to_string()),
            first_name: lead.first_name,
            phone: lead.phone,
            email: lead.email,
            service: lead.service,
            address: lead.address,
            timeline: lead.timeline,
            status: lead.status,
            created_at: lead.created_at,
        }
    }
}
