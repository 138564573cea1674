//! @acp:module "Component Type Classifier"
//! @acp:summary "Maps component code and name to the fixed role taxonomy"
//! @acp:domain extraction
//! @acp:layer logic
//!
//! Two phases, each an ordered rule list with first-match-wins semantics:
//!
//! 1. **Name**: case-insensitive substring match on the component name
//! 2. **Content**: keyword heuristics over the lowercased code, only when
//!    the name says nothing

use super::ComponentType;

/// Name keywords in priority order
const NAME_RULES: &[(&[&str], ComponentType)] = &[
    (&["button", "btn"], ComponentType::Button),
    (&["card"], ComponentType::Card),
    (&["hero"], ComponentType::Hero),
    (&["nav", "header", "menu"], ComponentType::Nav),
    (&["footer"], ComponentType::Footer),
    (&["form", "input", "contact"], ComponentType::Form),
    (&["testimonial", "review"], ComponentType::Testimonial),
    (&["feature"], ComponentType::Feature),
    (&["pricing", "price"], ComponentType::Pricing),
    (&["gallery", "grid", "masonry"], ComponentType::Gallery),
];

/// Content heuristics in priority order; predicates receive lowercased code
const CONTENT_RULES: &[(fn(&str) -> bool, ComponentType)] = &[
    (is_link_button, ComponentType::Button),
    (|c| contains_any(c, &["testimonial", "review", "quote"]), ComponentType::Testimonial),
    (|c| contains_any(c, &["pricing", "price", "$"]), ComponentType::Pricing),
    (|c| contains_any(c, &["gallery", "grid-cols", "masonry"]), ComponentType::Gallery),
    (is_hero_content, ComponentType::Hero),
    (|c| contains_any(c, &["nav", "navigation", "menu"]), ComponentType::Nav),
    (|c| contains_any(c, &["footer", "copyright"]), ComponentType::Footer),
    (|c| c.contains("shadow") && c.contains("rounded"), ComponentType::Card),
    (|c| contains_any(c, &["form", "input", "textarea"]), ComponentType::Form),
    (|c| contains_any(c, &["feature", "benefit"]), ComponentType::Feature),
    (|c| contains_any(c, &["<section", "section>"]), ComponentType::Section),
];

/// @acp:summary "Classify a component into the role taxonomy"
/// Never fails; falls back to [`ComponentType::Other`].
pub fn classify_type(code: &str, name: &str) -> ComponentType {
    classify_by_name(name)
        .or_else(|| classify_by_content(code))
        .unwrap_or(ComponentType::Other)
}

/// Phase 1: match the lowercased name against [`NAME_RULES`]
pub fn classify_by_name(name: &str) -> Option<ComponentType> {
    let lower = name.to_lowercase();
    NAME_RULES
        .iter()
        .find(|(keywords, _)| contains_any(&lower, keywords))
        .map(|(_, kind)| *kind)
}

/// Phase 2: match the lowercased code against [`CONTENT_RULES`]
pub fn classify_by_content(code: &str) -> Option<ComponentType> {
    let lower = code.to_lowercase();
    CONTENT_RULES
        .iter()
        .find(|(predicate, _)| predicate(&lower))
        .map(|(_, kind)| *kind)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn is_link_button(code: &str) -> bool {
    contains_any(code, &["onclick", "button"]) && contains_any(code, &["href", "link"])
}

fn is_hero_content(code: &str) -> bool {
    contains_any(code, &["hero", "banner"]) || (code.contains("h1") && code.contains("cta"))
}
