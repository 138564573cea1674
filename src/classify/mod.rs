//! @acp:module "Classification"
//! @acp:summary "Reusability and component-role classification of declaration spans"
//! @acp:domain extraction
//! @acp:layer logic
//!
//! # Classifiers
//!
//! Both classifiers are ordered rule lists evaluated top to bottom, first
//! match wins:
//!
//! - [`is_reusable`] decides whether a declaration is worth selling as a
//!   standalone unit. It favours precision: a false positive becomes a paid
//!   listing, a false negative only means manual extraction.
//! - [`classify_type`] maps code and name to the fixed [`ComponentType`]
//!   taxonomy, name first, then content heuristics, defaulting to
//!   [`ComponentType::Other`].

pub mod kind;
pub mod reusable;

pub use kind::classify_type;
pub use reusable::is_reusable;

use serde::{Deserialize, Serialize};

/// @acp:summary "Fixed role taxonomy for extracted components"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Button,
    Card,
    Hero,
    Nav,
    Footer,
    Section,
    Form,
    Testimonial,
    Feature,
    Pricing,
    Gallery,
    #[default]
    Other,
}

impl ComponentType {
    /// Every taxonomy member, in declaration order
    pub const ALL: [ComponentType; 12] = [
        ComponentType::Button,
        ComponentType::Card,
        ComponentType::Hero,
        ComponentType::Nav,
        ComponentType::Footer,
        ComponentType::Section,
        ComponentType::Form,
        ComponentType::Testimonial,
        ComponentType::Feature,
        ComponentType::Pricing,
        ComponentType::Gallery,
        ComponentType::Other,
    ];

    /// Get string representation for serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Button => "button",
            ComponentType::Card => "card",
            ComponentType::Hero => "hero",
            ComponentType::Nav => "nav",
            ComponentType::Footer => "footer",
            ComponentType::Section => "section",
            ComponentType::Form => "form",
            ComponentType::Testimonial => "testimonial",
            ComponentType::Feature => "feature",
            ComponentType::Pricing => "pricing",
            ComponentType::Gallery => "gallery",
            ComponentType::Other => "other",
        }
    }
}

impl std::str::FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ComponentType::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| format!("Unknown component type: {}", s))
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
