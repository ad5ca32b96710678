//! Company aggregate: a tenant business, its branding and chatbot settings.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{find_industry, Industry};
use crate::domain::foundation::{
    CompanyId, StateMachine, Timestamp, ValidationError,
};

use super::slug::company_slug;

pub const DEFAULT_PRIMARY_COLOR: &str = "#FF6B00";
pub const DEFAULT_SECONDARY_COLOR: &str = "#1a1a1a";
pub const DEFAULT_TONE: &str = "friendly";

/// Account status of a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    #[default]
    Active,
    Suspended,
    Cancelled,
}

impl CompanyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "active",
            CompanyStatus::Suspended => "suspended",
            CompanyStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(CompanyStatus::Active),
            "suspended" => Some(CompanyStatus::Suspended),
            "cancelled" => Some(CompanyStatus::Cancelled),
            _ => None,
        }
    }
}

impl StateMachine for CompanyStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CompanyStatus::*;
        matches!(
            (self, target),
            (Active, Suspended) | (Suspended, Active) | (Active, Cancelled) | (Suspended, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CompanyStatus::*;
        match self {
            Active => vec![Suspended, Cancelled],
            Suspended => vec![Active, Cancelled],
            Cancelled => vec![],
        }
    }
}

/// How the chatbot presents itself and what it asks for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatbotSettings {
    pub tone: Option<String>,
    pub greeting: Option<String>,
    /// Extra instructions appended to the system prompt.
    pub custom_prompt: Option<String>,
    pub show_pricing: bool,
    pub require_email: bool,
}

impl ChatbotSettings {
    /// Tone with the product default applied.
    pub fn tone_or_default(&self) -> &str {
        non_blank(self.tone.as_deref()).unwrap_or(DEFAULT_TONE)
    }
}

/// Visual identity shown on the public chat page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Branding {
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub website: Option<String>,
}

impl Branding {
    pub fn primary_color_or_default(&self) -> &str {
        non_blank(self.primary_color.as_deref()).unwrap_or(DEFAULT_PRIMARY_COLOR)
    }

    pub fn secondary_color_or_default(&self) -> &str {
        non_blank(self.secondary_color.as_deref()).unwrap_or(DEFAULT_SECONDARY_COLOR)
    }

    /// Validates colors and URLs before they are stored.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, color) in [
            ("primary_color", &self.primary_color),
            ("secondary_color", &self.secondary_color),
        ] {
            if let Some(color) = non_blank(color.as_deref()) {
                if !is_hex_color(color) {
                    return Err(ValidationError::invalid_format(field, "expected #RGB or #RRGGBB"));
                }
            }
        }
        for (field, url) in [("logo_url", &self.logo_url), ("website", &self.website)] {
            if let Some(url) = non_blank(url.as_deref()) {
                if !(url.starts_with("https://") || url.starts_with("http://")) {
                    return Err(ValidationError::invalid_format(field, "must be an http(s) URL"));
                }
            }
        }
        Ok(())
    }
}

/// A tenant business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub slug: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub email: Option<String>,
    pub industry_slug: Option<String>,
    pub status: CompanyStatus,
    pub branding: Branding,
    pub chatbot: ChatbotSettings,
    pub created_at: Timestamp,
}

impl Company {
    /// Creates a company from validated onboarding details.
    pub fn register(details: NewCompany, email: impl Into<String>, now: Timestamp) -> Self {
        Self {
            id: CompanyId::new(),
            slug: company_slug(&details.name, now),
            name: details.name,
            phone: details.phone,
            city: details.city,
            state: details.state,
            email: Some(email.into()),
            industry_slug: Some(details.industry.slug.to_string()),
            status: CompanyStatus::Active,
            branding: Branding::default(),
            chatbot: ChatbotSettings::default(),
            created_at: now,
        }
    }

    /// Catalog entry for this company's industry, if it has one.
    pub fn industry(&self) -> Option<&'static Industry> {
        self.industry_slug.as_deref().and_then(find_industry)
    }

    /// Industry display name, if known.
    pub fn industry_name(&self) -> Option<&'static str> {
        self.industry().map(|i| i.name)
    }

    /// Per-lead charge for this company, in cents.
    pub fn price_per_lead_cents(&self) -> i64 {
        self.industry()
            .or_else(|| find_industry("other"))
            .map(|i| i.price_per_lead_cents())
            .unwrap_or(0)
    }

    pub fn is_active(&self) -> bool {
        self.status == CompanyStatus::Active
    }

    /// Greeting the chat widget opens with.
    pub fn greeting(&self) -> String {
        if let Some(greeting) = non_blank(self.chatbot.greeting.as_deref()) {
            return greeting.to_string();
        }
        let industry = self
            .industry_name()
            .map(str::to_lowercase)
            .unwrap_or_else(|| "our services".to_string());
        format!(
            "Hey! 👋 I'm the assistant for {}. Looking for {}? I can help you get a quote in about 60 seconds!\n\nWhat service do you need?",
            self.name, industry
        )
    }
}

/// Validated onboarding input.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub industry: &'static Industry,
}

impl NewCompany {
    /// Validates raw onboarding fields.
    pub fn parse(
        name: &str,
        phone: &str,
        city: &str,
        state: &str,
        industry_slug: &str,
    ) -> Result<Self, ValidationError> {
        let name = required("company_name", name)?;
        let phone = required("phone", phone)?;
        let city = required("city", city)?;
        let state = required("state", state)?.to_uppercase();
        if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format("state", "must be a 2-letter code"));
        }
        let industry_slug = required("industry", industry_slug)?;
        let industry = find_industry(&industry_slug)
            .ok_or_else(|| ValidationError::invalid_format("industry", "unknown industry"))?;

        Ok(Self {
            name,
            phone,
            city,
            state,
            industry,
        })
    }
}

/// Per-company notification settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySettings {
    pub company_id: CompanyId,
    /// Where new-lead notifications go.
    pub lead_email: Option<String>,
}

pub(crate) fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
