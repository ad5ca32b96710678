//! Pay-per-lead pricing tiers and optional add-ons.

use serde::{Deserialize, Serialize};

/// One-time account setup fee, in cents.
pub const SETUP_FEE_CENTS: i64 = 99_00;

/// Per-lead price band an industry falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingTier {
    Premium,
    Standard,
    Basic,
    Starter,
}

impl PricingTier {
    /// All tiers from most to least expensive.
    pub const ALL: [PricingTier; 4] = [
        PricingTier::Premium,
        PricingTier::Standard,
        PricingTier::Basic,
        PricingTier::Starter,
    ];

    pub fn price_per_lead_cents(&self) -> i64 {
        match self {
            PricingTier::Premium => 10_00,
            PricingTier::Standard => 5_00,
            PricingTier::Basic => 2_00,
            PricingTier::Starter => 1_00,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PricingTier::Premium => "High-ticket services with significant job values",
            PricingTier::Standard => "Essential home services with moderate job values",
            PricingTier::Basic => "Recurring services with steady demand",
            PricingTier::Starter => "Lower-ticket services and specialty businesses",
        }
    }

    /// Example trades marketed under this tier (broader than the catalog).
    pub fn example_industries(&self) -> &'static [&'static str] {
        match self {
            PricingTier::Premium => &["Roofing", "HVAC", "Water Restoration", "Solar"],
            PricingTier::Standard => &["Plumbing", "Electrical", "Painting", "General Contractors"],
            PricingTier::Basic => &["Carpet Cleaning", "House Cleaning", "Landscaping", "Pest Control"],
            PricingTier::Starter => &["Pet Grooming", "Auto Detailing", "Small Services"],
        }
    }

    /// The tier highlighted on the pricing page.
    pub fn is_popular(&self) -> bool {
        matches!(self, PricingTier::Standard)
    }
}

/// Optional monthly add-on.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AddOn {
    pub name: &'static str,
    pub monthly_price_cents: i64,
    pub description: &'static str,
}

pub static ADD_ONS: &[AddOn] = &[
    AddOn {
        name: "SMS Alerts",
        monthly_price_cents: 25_00,
        description: "Instant text when leads come in",
    },
    AddOn {
        name: "CRM Integration",
        monthly_price_cents: 25_00,
        description: "Push to Jobber, ServiceTitan, HubSpot, etc.",
    },
    AddOn {
        name: "Advanced Analytics",
        monthly_price_cents: 25_00,
        description: "Conversion funnels, time analysis, comparisons",
    },
    AddOn {
        name: "White Label",
        monthly_price_cents: 100_00,
        description: "Remove 'Powered by Tapzilla'",
    },
    AddOn {
        name: "Priority Support",
        monthly_price_cents: 50_00,
        description: "Phone support, faster response",
    },
];

/// Formats cents as a dollar string with two decimals (`1050` -> `"10.50"`).
pub fn format_dollars(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
