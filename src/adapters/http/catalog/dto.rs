//! HTTP DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{
    format_dollars, AddOn, Industry, PricingTier, ADD_ONS, SETUP_FEE_CENTS,
};

/// Query of `GET /api/industries`. `all=true` adds onboarding-only entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndustryListQuery {
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustrySummaryResponse {
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub tier: PricingTier,
    pub price_per_lead_cents: i64,
    pub price_per_lead: String,
    pub description: &'static str,
}

impl From<&'static Industry> for IndustrySummaryResponse {
    fn from(i: &'static Industry) -> Self {
        Self {
            slug: i.slug,
            name: i.name,
            icon: i.icon,
            tier: i.tier,
            price_per_lead_cents: i.price_per_lead_cents(),
            price_per_lead: format_dollars(i.price_per_lead_cents()),
            description: i.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryResponse {
    #[serde(flatten)]
    pub industry: &'static Industry,
    pub price_per_lead_cents: i64,
    pub price_per_lead: String,
}

impl From<&'static Industry> for IndustryResponse {
    fn from(industry: &'static Industry) -> Self {
        Self {
            industry,
            price_per_lead_cents: industry.price_per_lead_cents(),
            price_per_lead: format_dollars(industry.price_per_lead_cents()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TierResponse {
    pub tier: PricingTier,
    pub price_per_lead_cents: i64,
    pub price_per_lead: String,
    pub description: &'static str,
    pub example_industries: &'static [&'static str],
    pub popular: bool,
}

impl From<PricingTier> for TierResponse {
    fn from(tier: PricingTier) -> Self {
        Self {
            tier,
            price_per_lead_cents: tier.price_per_lead_cents(),
            price_per_lead: format_dollars(tier.price_per_lead_cents()),
            description: tier.description(),
            example_industries: tier.example_industries(),
            popular: tier.is_popular(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingResponse {
    pub tiers: Vec<TierResponse>,
    pub add_ons: &'static [AddOn],
    pub setup_fee_cents: i64,
}

impl PricingResponse {
    pub fn current() -> Self {
        Self {
            tiers: PricingTier::ALL.into_iter().map(TierResponse::from).collect(),
            add_ons: ADD_ONS,
            setup_fee_cents: SETUP_FEE_CENTS,
        }
    }
}
