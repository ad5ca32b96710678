//! Outbound notification port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::lead::Lead;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification rejected: {0}")]
    Rejected(String),

    #[error("notification transport failed: {0}")]
    Transport(String),
}

/// Who to tell about a new lead.
#[derive(Debug, Clone)]
pub struct LeadNotification {
    pub to: String,
    pub company_name: String,
    pub lead: Lead,
    pub dashboard_url: String,
}

/// Sends emails on behalf of the platform.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_lead_captured(&self, notification: &LeadNotification) -> Result<(), NotificationError>;

    async fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), NotificationError>;
}
