//! HTTP DTOs for company endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{CompanyProfile, FaqInput};
use crate::domain::company::{Branding, ChatbotSettings, Company, CompanyStatus, Faq, Service, ServiceDraft};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingRequest {
    pub company_name: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub industry: String,
}

/// Body of `PUT /api/company/chatbot`. Omitted fields are cleared.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateChatbotRequest {
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub website: Option<String>,
    pub chatbot_tone: Option<String>,
    pub chatbot_greeting: Option<String>,
    pub chatbot_prompt: Option<String>,
    pub show_pricing: bool,
    pub require_email: bool,
    pub lead_email: Option<String>,
}

impl UpdateChatbotRequest {
    pub fn into_parts(self) -> (Branding, ChatbotSettings, Option<String>) {
        (
            Branding {
                tagline: self.tagline,
                logo_url: self.logo_url,
                primary_color: self.primary_color,
                secondary_color: self.secondary_color,
                website: self.website,
            },
            ChatbotSettings {
                tone: self.chatbot_tone,
                greeting: self.chatbot_greeting,
                custom_prompt: self.chatbot_prompt,
                show_pricing: self.show_pricing,
                require_email: self.require_email,
            },
            self.lead_email,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceServicesRequest {
    pub services: Vec<ServiceDraft>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceFaqsRequest {
    pub faqs: Vec<FaqInput>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub industry_name: Option<String>,
    pub status: CompanyStatus,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub website: Option<String>,
    pub chatbot_tone: String,
    pub chatbot_greeting: Option<String>,
    pub chatbot_prompt: Option<String>,
    pub show_pricing: bool,
    pub require_email: bool,
    pub created_at: String,
}

impl From<Company> for CompanyResponse {
    fn from(c: Company) -> Self {
        Self {
            id: c.id.to_string(),
            industry_name: c.industry_name().map(str::to_string),
            primary_color: c.branding.primary_color_or_default().to_string(),
            secondary_color: c.branding.secondary_color_or_default().to_string(),
            chatbot_tone: c.chatbot.tone_or_default().to_string(),
            created_at: c.created_at.as_datetime().to_rfc3339(),
            name: c.name,
            slug: c.slug,
            phone: c.phone,
            city: c.city,
            state: c.state,
            email: c.email,
            industry: c.industry_slug,
            status: c.status,
            tagline: c.branding.tagline,
            logo_url: c.branding.logo_url,
            website: c.branding.website,
            chatbot_greeting: c.chatbot.greeting,
            chatbot_prompt: c.chatbot.custom_prompt,
            show_pricing: c.chatbot.show_pricing,
            require_email: c.chatbot.require_email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub is_active: bool,
    pub sort_order: i32,
}

impl From<Service> for ServiceResponse {
    fn from(s: Service) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name,
            description: s.description,
            price_min: s.price_min,
            price_max: s.price_max,
            is_active: s.is_active,
            sort_order: s.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqResponse {
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
}

impl From<Faq> for FaqResponse {
    fn from(f: Faq) -> Self {
        Self {
            question: f.question,
            answer: f.answer,
            sort_order: f.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfileResponse {
    pub company: CompanyResponse,
    pub lead_email: Option<String>,
    pub services: Vec<ServiceResponse>,
    pub faqs: Vec<FaqResponse>,
}

impl From<CompanyProfile> for CompanyProfileResponse {
    fn from(p: CompanyProfile) -> Self {
        Self {
            company: p.company.into(),
            lead_email: p.settings.lead_email,
            services: p.services.into_iter().map(Into::into).collect(),
            faqs: p.faqs.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingResponse {
    pub company: CompanyResponse,
    pub next: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chatbot_request_defaults_flags_off() {
        let req: UpdateChatbotRequest = serde_json::from_str(r##"{"primary_color": "#112233"}"##).unwrap();
        let (branding, chatbot, lead_email) = req.into_parts();
        assert_eq!(branding.primary_color.as_deref(), Some("#112233"));
        assert!(!chatbot.show_pricing);
        assert!(lead_email.is_none());
    }

    #[test]
    fn services_request_defaults_active() {
        let req: ReplaceServicesRequest =
            serde_json::from_str(r#"{"services": [{"name": "Deep clean", "price_min": 150}]}"#).unwrap();
        assert!(req.services[0].is_active);
        assert_eq!(req.services[0].price_max, None);
    }
}
