//! Notifier that only logs. Wired in when no email API key is configured.

use async_trait::async_trait;

use crate::ports::{LeadNotification, NotificationError, Notifier};

#[derive(Debug, Clone, Default)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn notify_lead_captured(&self, notification: &LeadNotification) -> Result<(), NotificationError> {
        tracing::info!(
            to = %notification.to,
            company = %notification.company_name,
            lead_id = %notification.lead.id,
            "Email disabled; lead notification not sent"
        );
        Ok(())
    }

    async fn send_password_reset(&self, to: &str, _reset_link: &str) -> Result<(), NotificationError> {
        tracing::info!(to = %to, "Email disabled; password reset not sent");
        Ok(())
    }
}
