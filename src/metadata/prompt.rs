//! @acp:module "Prompt Metadata"
//! @acp:summary "Category, tags and description for a template derived from its prompt"
//! @acp:domain marketplace
//! @acp:layer logic

use serde::{Deserialize, Serialize};

use super::MAX_TAGS;

/// Prompt excerpt length used in descriptions
const DESCRIPTION_PROMPT_CHARS: usize = 120;

/// Category keywords in priority order
const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (&["portfolio", "designer", "artist"], "portfolio"),
    (&["saas", "software", "app"], "saas"),
    (&["e-commerce", "shop", "store", "product"], "e-commerce"),
    (&["agency", "studio", "creative"], "agency"),
    (&["landing", "startup"], "landing-page"),
    (&["blog", "magazine", "editorial"], "blog"),
    (&["corporate", "business", "b2b"], "corporate"),
];

const GENERAL_CATEGORY: &str = "general";

/// Tag → prompt keywords that imply it
const PROMPT_TAGS: &[(&str, &[&str])] = &[
    ("responsive", &["responsive", "mobile", "tablet", "desktop"]),
    ("modern", &["modern", "contemporary", "fresh"]),
    ("minimal", &["minimal", "clean", "simple"]),
    ("bold", &["bold", "vibrant", "energetic"]),
    ("professional", &["professional", "corporate", "business"]),
    ("creative", &["creative", "artistic", "design"]),
    ("e-commerce", &["shop", "store", "product", "cart", "checkout"]),
    ("portfolio", &["portfolio", "gallery", "showcase", "work"]),
    ("landing", &["landing", "hero", "cta", "conversion"]),
    ("saas", &["saas", "software", "app", "tool"]),
];

/// Style name fragment (case-sensitive) → tags
const STYLE_TAGS: &[(&str, &[&str])] = &[
    ("Corporate", &["corporate", "professional"]),
    ("SaaS", &["saas", "tech", "developer"]),
    ("E-commerce", &["e-commerce", "shop", "product"]),
    ("Portfolio", &["portfolio", "creative", "designer"]),
    ("Agency", &["agency", "studio", "creative"]),
    ("Editorial", &["blog", "content", "editorial"]),
    ("Luxury", &["luxury", "premium", "high-end"]),
    ("Retro", &["retro", "y2k", "nostalgic"]),
    ("Playful", &["playful", "friendly", "startup"]),
    ("Startup", &["startup", "landing", "saas"]),
];

/// @acp:summary "Marketplace metadata for a generated template"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMetadata {
    pub category: String,
    pub tags: Vec<String>,
    pub description: String,
}

/// @acp:summary "Derive template category, tags and description from the generation prompt"
pub fn extract_prompt_metadata(prompt: &str, style: &str) -> PromptMetadata {
    let lower = prompt.to_lowercase();

    let category = CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(GENERAL_CATEGORY);

    let prompt_tags = PROMPT_TAGS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(tag, _)| *tag);

    let style_tags = STYLE_TAGS
        .iter()
        .filter(|(fragment, _)| style.contains(fragment))
        .flat_map(|(_, tags)| tags.iter().copied());

    let mut tags: Vec<String> = Vec::new();
    for tag in prompt_tags.chain(style_tags) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags.truncate(MAX_TAGS);

    PromptMetadata {
        category: category.to_string(),
        tags,
        description: describe_template(prompt, style, category),
    }
}

fn describe_template(prompt: &str, style: &str, category: &str) -> String {
    let audience = if category == GENERAL_CATEGORY {
        String::new()
    } else {
        format!(" for {}", category.replacen('-', " ", 1))
    };

    let excerpt: String = prompt.chars().take(DESCRIPTION_PROMPT_CHARS).collect();
    let ellipsis = if prompt.chars().count() > DESCRIPTION_PROMPT_CHARS {
        "..."
    } else {
        ""
    };

    format!("{} template{}. {}{}", style, audience, excerpt, ellipsis)
}
