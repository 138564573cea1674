//! @acp:module "Metadata Synthesizer"
//! @acp:summary "Marketplace tags, suggested price and description for extracted components"
//! @acp:domain marketplace
//! @acp:layer logic
//!
//! Tags and prices are derived deterministically from the component type,
//! the template style and features detected in the code. Descriptions come
//! from an external [`DescriptionGenerator`]; when none is available or it
//! fails, a fixed template is used.

pub mod pricing;
pub mod prompt;

pub use pricing::{
    determine_pricing_tier, format_price, suggest_template_pricing, tier_from_price, Complexity,
    PricingInfo, PricingTier,
};
pub use prompt::{extract_prompt_metadata, PromptMetadata};

use crate::classify::ComponentType;
use crate::error::Result;

/// Maximum number of tags attached to a component
pub const MAX_TAGS: usize = 8;

/// Upper bound for a suggested component price
pub const MAX_COMPONENT_PRICE: u32 = 30;

/// Added per complexity signal (size, animation, logic)
const COMPLEXITY_SURCHARGE: u32 = 5;

/// Code longer than this many characters counts as large
const LARGE_CODE_CHARS: usize = 1000;

/// Style keyword → tags, checked against the lowercased style
const STYLE_TAGS: &[(&str, &[&str])] = &[
    ("minimal", &["minimal", "clean"]),
    ("dark", &["dark", "tech"]),
    ("saas", &["saas", "tech"]),
    ("e-commerce", &["e-commerce", "shop"]),
    ("portfolio", &["portfolio", "creative"]),
    ("agency", &["agency", "bold"]),
    ("luxury", &["luxury", "premium"]),
    ("retro", &["retro", "y2k"]),
    ("playful", &["playful", "friendly"]),
];

/// Code markers → feature tag, checked against the lowercased code
const FEATURE_TAGS: &[(&[&str], &str)] = &[
    (&["framer-motion", "motion."], "animated"),
    (&["md:", "lg:", "responsive"], "responsive"),
    (&["hover", "onhover"], "interactive"),
    (&["gradient"], "gradient"),
];

/// @acp:summary "Base price per component type"
pub fn base_price(kind: ComponentType) -> u32 {
    match kind {
        ComponentType::Button => 5,
        ComponentType::Card => 8,
        ComponentType::Hero => 15,
        ComponentType::Nav => 12,
        ComponentType::Footer => 8,
        ComponentType::Section => 10,
        ComponentType::Form => 12,
        ComponentType::Testimonial => 8,
        ComponentType::Feature => 8,
        ComponentType::Pricing => 15,
        ComponentType::Gallery => 12,
        ComponentType::Other => 10,
    }
}

/// @acp:summary "Derive up to eight unique marketplace tags"
pub fn synthesize_tags(kind: ComponentType, style: &str, code: &str) -> Vec<String> {
    let style_lower = style.to_lowercase();
    let code_lower = code.to_lowercase();

    let style_tags = STYLE_TAGS
        .iter()
        .filter(|(keyword, _)| style_lower.contains(keyword))
        .flat_map(|(_, tags)| tags.iter().copied());

    let feature_tags = FEATURE_TAGS
        .iter()
        .filter(|(markers, _)| markers.iter().any(|m| code_lower.contains(m)))
        .map(|(_, tag)| *tag);

    let mut tags: Vec<String> = Vec::new();
    for tag in std::iter::once(kind.as_str()).chain(style_tags).chain(feature_tags) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags.truncate(MAX_TAGS);
    tags
}

/// @acp:summary "Suggest a component price from type and code complexity"
/// The result always lies in `[base_price(kind), 30]`.
pub fn suggest_price(kind: ComponentType, code: &str) -> u32 {
    let signals = [
        code.chars().count() > LARGE_CODE_CHARS,
        has_animation(code),
        has_stateful_logic(code),
    ];
    let surcharge = signals.iter().filter(|s| **s).count() as u32 * COMPLEXITY_SURCHARGE;

    (base_price(kind) + surcharge).min(MAX_COMPONENT_PRICE)
}

fn has_animation(code: &str) -> bool {
    code.contains("framer-motion") || code.contains("motion.")
}

fn has_stateful_logic(code: &str) -> bool {
    code.contains("useState") || code.contains("useEffect") || code.contains("map(")
}

/// Inputs handed to a description generator
#[derive(Debug, Clone, Copy)]
pub struct DescriptionContext<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub component_type: ComponentType,
    pub style: &'a str,
    /// Marketplace category from the request, when one was given
    pub category: Option<&'a str>,
}

/// @acp:summary "External collaborator that writes marketplace copy"
pub trait DescriptionGenerator: Send + Sync {
    /// Produce a short sales description for the component
    fn describe(&self, context: &DescriptionContext<'_>) -> Result<String>;
}

/// Deterministic description used when no generator is available
pub fn fallback_description(kind: ComponentType, style: &str) -> String {
    format!("A {} component in {} style. Ready to use.", kind, style)
}

/// @acp:summary "Describe a component, falling back to the fixed template"
pub fn describe_component(
    generator: Option<&dyn DescriptionGenerator>,
    context: &DescriptionContext<'_>,
) -> String {
    let Some(generator) = generator else {
        return fallback_description(context.component_type, context.style);
    };

    match generator.describe(context) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            tracing::warn!("Empty description for {}, using fallback", context.name);
            fallback_description(context.component_type, context.style)
        }
        Err(e) => {
            tracing::warn!("Description generation failed for {}: {}", context.name, e);
            fallback_description(context.component_type, context.style)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarveError;
    use pretty_assertions::assert_eq;

    struct Fixed(&'static str);

    impl DescriptionGenerator for Fixed {
        fn describe(&self, _context: &DescriptionContext<'_>) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl DescriptionGenerator for Failing {
        fn describe(&self, _context: &DescriptionContext<'_>) -> Result<String> {
            Err(CarveError::Generator("timeout".to_string()))
        }
    }

    fn context() -> DescriptionContext<'static> {
        DescriptionContext {
            code: "<div />",
            name: "HeroBanner",
            component_type: ComponentType::Hero,
            style: "Minimal Corporate",
            category: None,
        }
    }

    #[test]
    fn test_tags_seeded_with_type_and_style() {
        let tags = synthesize_tags(ComponentType::Card, "Minimal Corporate", "");
        assert_eq!(tags, vec!["card", "minimal", "clean"]);
    }

    #[test]
    fn test_tags_from_features() {
        let code = r#"<motion.div className="md:flex hover:scale-105 bg-gradient-to-r">"#;
        let tags = synthesize_tags(ComponentType::Hero, "", code);
        assert_eq!(tags, vec!["hero", "animated", "responsive", "interactive", "gradient"]);
    }

    #[test]
    fn test_tags_deduplicated() {
        // "dark" and "saas" both contribute "tech"
        let tags = synthesize_tags(ComponentType::Nav, "Dark Tech / SaaS", "");
        assert_eq!(tags, vec!["nav", "dark", "tech", "saas"]);
    }

    #[test]
    fn test_tags_capped_at_eight() {
        let style = "minimal dark saas luxury retro";
        let code = "motion. md: hover gradient";
        let tags = synthesize_tags(ComponentType::Gallery, style, code);
        assert_eq!(tags.len(), MAX_TAGS);
        assert_eq!(tags[0], "gallery");
    }

    #[test]
    fn test_price_base_only() {
        assert_eq!(suggest_price(ComponentType::Button, "<button />"), 5);
        assert_eq!(suggest_price(ComponentType::Hero, ""), 15);
    }

    #[test]
    fn test_price_surcharges_and_cap() {
        let code = format!("import {{ motion }} from 'framer-motion'\nuseState\n{}", "x".repeat(1200));
        assert_eq!(suggest_price(ComponentType::Button, &code), 20);
        assert_eq!(suggest_price(ComponentType::Pricing, &code), 30);
    }

    #[test]
    fn test_price_within_bounds_for_every_type() {
        let long = "y".repeat(2000);
        let samples = ["", "motion.", "useEffect map(", long.as_str()];
        for kind in ComponentType::ALL {
            for code in samples {
                let price = suggest_price(kind, code);
                assert!(price >= base_price(kind) && price <= MAX_COMPONENT_PRICE);
            }
        }
    }

    #[test]
    fn test_fallback_description() {
        assert_eq!(
            fallback_description(ComponentType::Hero, "Minimal Corporate"),
            "A hero component in Minimal Corporate style. Ready to use."
        );
    }

    #[test]
    fn test_describe_uses_generator() {
        let generator = Fixed("  A bold hero.  ");
        assert_eq!(describe_component(Some(&generator), &context()), "A bold hero.");
    }

    #[test]
    fn test_describe_falls_back() {
        let expected = fallback_description(ComponentType::Hero, "Minimal Corporate");
        assert_eq!(describe_component(None, &context()), expected);
        assert_eq!(describe_component(Some(&Failing), &context()), expected);
        assert_eq!(describe_component(Some(&Fixed("   ")), &context()), expected);
    }
}
