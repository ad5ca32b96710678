//! Catalog module - Industries, pricing tiers and add-ons.

mod industry;
mod pricing;

pub use industry::{
    all_industry_slugs, find_industry, listed_industries, ExampleConversation, Industry, INDUSTRIES,
};
pub use pricing::{format_dollars, AddOn, PricingTier, ADD_ONS, SETUP_FEE_CENTS};
