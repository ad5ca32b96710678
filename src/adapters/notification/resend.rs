//! Resend email adapter.
//!
//! Sends transactional email with `POST {base_url}/emails`. Non-2xx
//! responses are reported as `Rejected`, connection problems as `Transport`.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::domain::catalog::format_dollars;
use crate::ports::{LeadNotification, NotificationError, Notifier};

#[derive(Debug, Clone)]
pub struct ResendConfig {
    api_key: Secret<String>,
    /// Full `From` header, e.g. `Tapzilla <leads@tapzilla.com>`.
    pub from: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ResendConfig {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            from: from.into(),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

pub struct ResendNotifier {
    config: ResendConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: String,
    text: String,
}

impl ResendNotifier {
    pub fn new(config: ResendConfig) -> Result<Self, NotificationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NotificationError::Transport(e.to_string()))?;
        Ok(Self { config, client })
    }

    async fn send(&self, to: &str, subject: String, text: String) -> Result<(), NotificationError> {
        let body = SendEmailRequest {
            from: &self.config.from,
            to: [to],
            subject,
            text,
        };

        let response = self
            .client
            .post(format!("{}/emails", self.config.base_url.trim_end_matches('/')))
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(to = %to, "Email sent");
            return Ok(());
        }

        let detail = response.text().await.unwrap_or_default();
        Err(NotificationError::Rejected(format!("{}: {}", status.as_u16(), detail)))
    }
}

/// Plain-text body for a new-lead email.
fn lead_email_body(notification: &LeadNotification) -> String {
    let lead = &notification.lead;
    let mut lines = vec![
        format!("New lead for {}!", notification.company_name),
        String::new(),
        format!("Name: {}", lead.display_name()),
        format!("Phone: {}", lead.phone),
    ];
    let optional = [
        ("Email", &lead.email),
        ("Service", &lead.service),
        ("Address", &lead.address),
        ("Timeline", &lead.timeline),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            lines.push(format!("{}: {}", label, value));
        }
    }
    lines.push(String::new());
    lines.push(format!("Lead charge: ${}", format_dollars(lead.billed_amount_cents)));
    lines.push(format!("View it in your dashboard: {}", notification.dashboard_url));
    lines.join("\n")
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn notify_lead_captured(&self, notification: &LeadNotification) -> Result<(), NotificationError> {
        let subject = match &notification.lead.service {
            Some(service) => format!("New lead: {} ({})", notification.lead.display_name(), service),
            None => format!("New lead: {}", notification.lead.display_name()),
        };
        self.send(&notification.to, subject, lead_email_body(notification)).await
    }

    async fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), NotificationError> {
        let text = format!(
            "We received a request to reset your Tapzilla password.\n\nReset it here: {}\n\nIf you didn't ask for this, you can ignore this email.",
            reset_link
        );
        self.send(to, "Reset your Tapzilla password".to_string(), text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chatbot::LeadDetails;
    use crate::domain::foundation::{CompanyId, ConversationId, Timestamp};
    use crate::domain::lead::Lead;

    fn notification() -> LeadNotification {
        let details = LeadDetails {
            first_name: Some("Sarah".into()),
            phone: Some("5551234567".into()),
            service: Some("Carpet cleaning".into()),
            timeline: Some("this week".into()),
            ..Default::default()
        };
        let lead = Lead::capture(CompanyId::new(), None, ConversationId::new(), details, 200, Timestamp::now()).unwrap();
        LeadNotification {
            to: "owner@example.com".into(),
            company_name: "Pro Carpet Care".into(),
            lead,
            dashboard_url: "https://tapzilla.com/dashboard/leads".into(),
        }
    }

    #[test]
    fn lead_body_lists_known_fields_only() {
        let body = lead_email_body(&notification());
        assert!(body.starts_with("New lead for Pro Carpet Care!"));
        assert!(body.contains("Name: Sarah"));
        assert!(body.contains("Phone: 5551234567"));
        assert!(body.contains("Timeline: this week"));
        assert!(!body.contains("Address:"));
        assert!(body.contains("Lead charge: $2.00"));
        assert!(body.ends_with("https://tapzilla.com/dashboard/leads"));
    }

    #[test]
    fn config_defaults_to_resend_api() {
        let config = ResendConfig::new("re_test", "Tapzilla <leads@tapzilla.com>");
        assert_eq!(config.base_url, "https://api.resend.com");
        assert_eq!(config.api_key.expose_secret(), "re_test");
    }
}
