//! @acp:module "Template Pricing"
//! @acp:summary "Pricing tiers for whole templates: free, standard, premium"
//! @acp:domain marketplace
//! @acp:layer logic

use serde::{Deserialize, Serialize};

/// Styles that always sell as premium
const PREMIUM_STYLES: &[&str] = &[
    "E-commerce Product Showcase",
    "Luxury / Premium Brand",
    "Agency / Studio Bold",
];

/// Styles that sell as standard
const STANDARD_STYLES: &[&str] = &[
    "Minimal Corporate",
    "Dark Tech / SaaS",
    "Single-Page App / Startup Landing",
    "Creative Portfolio / Designer",
];

/// @acp:summary "Marketplace pricing tier for a template"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    Free,
    Standard,
    Premium,
}

impl PricingTier {
    /// List price, label and blurb for this tier
    pub fn info(self) -> PricingInfo {
        match self {
            PricingTier::Free => PricingInfo {
                tier: self,
                price: 0,
                label: "Free",
                description: "Perfect for getting started",
            },
            PricingTier::Standard => PricingInfo {
                tier: self,
                price: 49,
                label: "$49",
                description: "Professional templates",
            },
            PricingTier::Premium => PricingInfo {
                tier: self,
                price: 99,
                label: "$99+",
                description: "Premium, feature-rich templates",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingInfo {
    pub tier: PricingTier,
    pub price: u32,
    pub label: &'static str,
    pub description: &'static str,
}

/// Rough build complexity of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Medium,
    Complex,
}

/// @acp:summary "Pick a tier from the template style and complexity"
pub fn determine_pricing_tier(style: &str, complexity: Complexity) -> PricingTier {
    if complexity == Complexity::Complex || PREMIUM_STYLES.contains(&style) {
        return PricingTier::Premium;
    }
    if STANDARD_STYLES.contains(&style) || complexity == Complexity::Medium {
        return PricingTier::Standard;
    }
    PricingTier::Free
}

/// Tier implied by an existing price; absent or zero is free
pub fn tier_from_price(price: Option<u32>) -> PricingTier {
    match price.unwrap_or(0) {
        p if p >= 99 => PricingTier::Premium,
        p if p >= 49 => PricingTier::Standard,
        _ => PricingTier::Free,
    }
}

/// Display form of a price; absent or zero is `Free`
pub fn format_price(price: Option<u32>) -> String {
    match price {
        None | Some(0) => "Free".to_string(),
        Some(p) => format!("${}", p),
    }
}

/// Suggested tier and list price for a template of medium complexity
pub fn suggest_template_pricing(style: &str) -> (PricingTier, u32) {
    let tier = determine_pricing_tier(style, Complexity::Medium);
    (tier, tier.info().price)
}
