//! Industry catalog.
//!
//! The catalog drives per-lead pricing and the marketing industry pages.
//! It is compiled in and seeded into the `industries` table by migration,
//! so the slugs below must match `migrations/0002_seed_industries.sql`.

use serde::Serialize;

use super::PricingTier;

/// A sample exchange shown on the industry page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExampleConversation {
    pub service: &'static str,
    pub questions: &'static [&'static str],
}

/// One industry the product sells into.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Industry {
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub tier: PricingTier,
    pub description: &'static str,
    pub tagline: &'static str,
    pub problems: &'static [&'static str],
    pub qr_placements: &'static [&'static str],
    pub example_conversation: Option<ExampleConversation>,
    /// Listed on marketing pages. `other` is onboarding-only.
    #[serde(skip)]
    pub listed: bool,
}

impl Industry {
    /// Price charged per captured lead, in cents.
    pub fn price_per_lead_cents(&self) -> i64 {
        self.tier.price_per_lead_cents()
    }
}

/// Every industry, in display order.
pub static INDUSTRIES: &[Industry] = &[
    Industry {
        slug: "roofing",
        name: "Roofing",
        icon: "🏠",
        tier: PricingTier::Premium,
        description: "Qualified roofing leads delivered to your phone, not shared with competitors.",
        tagline: "Stop Competing for Shared Leads",
        problems: &[
            "Storm chasers flooding the market after every hail storm",
            "HomeAdvisor sending the same lead to 5 roofers",
            "Spending $100+ per lead that ghosts you",
            "Competing on price instead of reputation",
        ],
        qr_placements: &[
            "Work trucks and trailers",
            "Job site signs with 'Your neighbor chose us'",
            "Insurance agent offices",
            "Real estate offices for new homeowners",
        ],
        example_conversation: Some(ExampleConversation {
            service: "roof inspection",
            questions: &[
                "What type of issue are you seeing?",
                "When was your last inspection?",
                "Is this an insurance claim?",
            ],
        }),
        listed: true,
    },
    Industry {
        slug: "hvac",
        name: "HVAC",
        icon: "❄️",
        tier: PricingTier::Premium,
        description: "Hot leads for heating and cooling services, year-round.",
        tagline: "Cool Leads, Hot Results",
        problems: &[
            "Seasonal demand fluctuations",
            "Expensive Google Ads during peak season",
            "Competitors undercutting on maintenance contracts",
            "Emergency calls that don't convert to long-term customers",
        ],
        qr_placements: &[
            "Service vans and trucks",
            "Thermostat or unit stickers after service",
            "Property management offices",
            "New construction sites",
        ],
        example_conversation: Some(ExampleConversation {
            service: "AC repair",
            questions: &[
                "Is your system cooling at all?",
                "What type of system do you have?",
                "How old is your unit?",
            ],
        }),
        listed: true,
    },
    Industry {
        slug: "plumbing",
        name: "Plumbing",
        icon: "🔧",
        tier: PricingTier::Standard,
        description: "Plumbing leads that flow right to you.",
        tagline: "Stop the Lead Leak",
        problems: &[
            "Emergency calls with unrealistic expectations",
            "Price shoppers comparing 5 quotes",
            "Hard to differentiate from competitors",
            "Expensive PPC during peak demand",
        ],
        qr_placements: &[
            "Service vans",
            "Bathroom renovation showrooms",
            "Property management offices",
            "Real estate closing gift partnerships",
        ],
        example_conversation: Some(ExampleConversation {
            service: "plumbing repair",
            questions: &[
                "What type of plumbing issue?",
                "Is it an emergency?",
                "Is there active water damage?",
            ],
        }),
        listed: true,
    },
    Industry {
        slug: "carpet-cleaning",
        name: "Carpet Cleaning",
        icon: "🧹",
        tier: PricingTier::Basic,
        description: "Fill your schedule with carpet cleaning jobs.",
        tagline: "Clean Up Your Lead Generation",
        problems: &[
            "Low margins mean you can't afford expensive leads",
            "Groupon customers who never come back",
            "Seasonal slowdowns between moves",
            "Hard to stand out from franchises",
        ],
        qr_placements: &[
            "Wrapped vans",
            "Property management offices (turnover cleaning)",
            "Real estate agent partnerships",
            "Laundromats and dry cleaners",
        ],
        example_conversation: Some(ExampleConversation {
            service: "carpet cleaning",
            questions: &[
                "How many rooms?",
                "Any pet stains or odors?",
                "When do you need this done?",
            ],
        }),
        listed: true,
    },
    Industry {
        slug: "house-cleaning",
        name: "House Cleaning",
        icon: "🏡",
        tier: PricingTier::Basic,
        description: "Recurring cleaning clients start with a conversation.",
        tagline: "Sweep Away Lead Generation Problems",
        problems: &[
            "One-time cleanings don't build a business",
            "Clients canceling last minute",
            "Race to the bottom on pricing",
            "Thumbtack taking a cut of every job",
        ],
        qr_placements: &[
            "Company vehicles",
            "Gym and yoga studio partnerships",
            "Real estate staging companies",
            "Luxury apartment buildings",
        ],
        example_conversation: Some(ExampleConversation {
            service: "house cleaning",
            questions: &[
                "How many bedrooms/bathrooms?",
                "One-time or recurring?",
                "Any pets in the home?",
            ],
        }),
        listed: true,
    },
    Industry {
        slug: "landscaping",
        name: "Landscaping",
        icon: "🌿",
        tier: PricingTier::Basic,
        description: "Grow your landscaping business with qualified leads.",
        tagline: "Cultivate Better Leads",
        problems: &[
            "Seasonal revenue swings",
            "Tire-kickers wanting free consultations",
            "HOAs with slow payment cycles",
            "Competing with national franchises",
        ],
        qr_placements: &[
            "Trucks and trailers",
            "Job site signs in visible yards",
            "Garden centers and nurseries",
            "HOA management offices",
        ],
        example_conversation: Some(ExampleConversation {
            service: "landscaping",
            questions: &[
                "What services are you looking for?",
                "Approximate yard size?",
                "Ongoing maintenance or one-time project?",
            ],
        }),
        listed: true,
    },
    Industry {
        slug: "pest-control",
        name: "Pest Control",
        icon: "🐜",
        tier: PricingTier::Basic,
        description: "Exterminate your lead generation problems.",
        tagline: "Bug-Free Lead Generation",
        problems: &[
            "Seasonal spikes overwhelming capacity",
            "Customers only calling for emergencies",
            "Low retention on preventive contracts",
            "National brands dominating online",
        ],
        qr_placements: &[
            "Service vehicles",
            "Property management offices",
            "Real estate offices (pre-sale inspections)",
            "Neighborhood association boards",
        ],
        example_conversation: Some(ExampleConversation {
            service: "pest control",
            questions: &[
                "What type of pest issue?",
                "How severe is the infestation?",
                "Do you have children or pets?",
            ],
        }),
        listed: true,
    },
    Industry {
        slug: "electrical",
        name: "Electrical",
        icon: "⚡",
        tier: PricingTier::Standard,
        description: "Power up your electrical business with qualified leads.",
        tagline: "Electrify Your Lead Flow",
        problems: &[
            "Customers afraid of electrician pricing",
            "Small jobs not worth the trip",
            "Competing with handymen on simple work",
            "Seasonal lulls between projects",
        ],
        qr_placements: &[
            "Work vans",
            "EV charger installation sites",
            "Solar company partnerships",
            "New construction walkways",
        ],
        example_conversation: Some(ExampleConversation {
            service: "electrical work",
            questions: &[
                "What electrical work do you need?",
                "Is this a repair or new installation?",
                "How old is your home's wiring?",
            ],
        }),
        listed: true,
    },
    Industry {
        slug: "painting",
        name: "Painting",
        icon: "🎨",
        tier: PricingTier::Standard,
        description: "Paint a better picture of your pipeline.",
        tagline: "Brush Up Your Lead Generation",
        problems: &[
            "Estimate no-shows wasting your time",
            "Lowballers undercutting quality work",
            "Seasonal slowdowns in winter",
            "Commercial jobs with long sales cycles",
        ],
        qr_placements: &[
            "Work trucks with before/after photos",
            "Paint store partnerships",
            "Real estate staging companies",
            "Property management offices",
        ],
        example_conversation: Some(ExampleConversation {
            service: "painting",
            questions: &[
                "Interior or exterior?",
                "How many rooms/square footage?",
                "When are you looking to have this done?",
            ],
        }),
        listed: true,
    },
    Industry {
        slug: "auto-detailing",
        name: "Auto Detailing",
        icon: "🚗",
        tier: PricingTier::Starter,
        description: "Detail your way to more customers.",
        tagline: "Shine Up Your Client List",
        problems: &[
            "Low average ticket means thin margins",
            "Mobile vs shop location confusion",
            "Seasonal slowdowns",
            "Customers expecting car wash prices",
        ],
        qr_placements: &[
            "Mobile unit or work vehicle",
            "Auto dealership partnerships",
            "Corporate office parking lots",
            "Gym and country club parking",
        ],
        example_conversation: Some(ExampleConversation {
            service: "auto detailing",
            questions: &[
                "What type of vehicle?",
                "Interior, exterior, or full detail?",
                "Any specific problem areas?",
            ],
        }),
        listed: true,
    },
    Industry {
        slug: "other",
        name: "Other",
        icon: "📦",
        tier: PricingTier::Basic,
        description: "Any local service business.",
        tagline: "Leads for Every Trade",
        problems: &[],
        qr_placements: &[],
        example_conversation: None,
        listed: false,
    },
];

/// Looks up an industry by slug.
pub fn find_industry(slug: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.slug == slug)
}

/// Industries shown on marketing pages.
pub fn listed_industries() -> impl Iterator<Item = &'static Industry> {
    INDUSTRIES.iter().filter(|i| i.listed)
}

/// Slugs of every industry, including onboarding-only entries.
pub fn all_industry_slugs() -> Vec<&'static str> {
    INDUSTRIES.iter().map(|i| i.slug).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = all_industry_slugs().into_iter().collect();
        assert_eq!(slugs.len(), INDUSTRIES.len());
    }

    #[test]
    fn find_industry_by_slug() {
        let roofing = find_industry("roofing").unwrap();
        assert_eq!(roofing.name, "Roofing");
        assert_eq!(roofing.price_per_lead_cents(), 1000);

        assert!(find_industry("underwater-basket-weaving").is_none());
    }

    #[test]
    fn onboarding_prices_match_tiers() {
        let expected = [
            ("roofing", 1000),
            ("hvac", 1000),
            ("plumbing", 500),
            ("electrical", 500),
            ("carpet-cleaning", 200),
            ("house-cleaning", 200),
            ("landscaping", 200),
            ("painting", 500),
            ("pest-control", 200),
            ("auto-detailing", 100),
            ("other", 200),
        ];
        for (slug, cents) in expected {
            assert_eq!(find_industry(slug).unwrap().price_per_lead_cents(), cents, "{}", slug);
        }
    }

    #[test]
    fn other_is_not_listed() {
        assert_eq!(listed_industries().count(), 10);
        assert!(listed_industries().all(|i| i.slug != "other"));
    }
}
