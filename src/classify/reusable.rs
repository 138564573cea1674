//! @acp:module "Reusability Classifier"
//! @acp:summary "Decides whether a declaration is a sellable standalone unit"
//! @acp:domain extraction
//! @acp:layer logic

use std::sync::LazyLock;

use regex::Regex;

/// Structural names that are never sold on their own (exact, case-insensitive)
pub const STRUCTURAL_NAMES: &[&str] = &[
    "app",
    "main",
    "page",
    "layout",
    "default",
    "component",
    "wrapper",
    "container",
];

/// Role keywords that mark a name as reusable (substring, case-insensitive)
pub const REUSABLE_KEYWORDS: &[&str] = &[
    "button", "btn",
    "card",
    "hero",
    "nav", "navigation", "header", "menu",
    "footer",
    "section",
    "form", "input", "textarea", "select",
    "testimonial", "review", "quote",
    "feature", "benefit",
    "pricing", "price",
    "gallery", "grid", "masonry",
    "modal", "dialog", "popup",
    "badge", "tag", "chip",
    "avatar", "profile",
    "list", "item",
    "tabs", "tab",
    "accordion",
    "carousel", "slider",
    "banner", "alert", "notification",
    "sidebar",
    "breadcrumb",
    "pagination",
    "tooltip",
    "dropdown",
    "checkbox", "radio",
    "switch", "toggle",
];

static RETURNS_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"return\s*\(|return\s*<").unwrap());

static TYPED_PROPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"props|interface.*Props|type.*Props").unwrap());

static INTERACTIVE_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"button|div.*className|motion\.").unwrap());

/// Outcome of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Accept,
    Reject,
}

/// A rule returns `Some` to decide, `None` to defer to the next rule
type Rule = fn(&Candidate<'_>) -> Option<Verdict>;

struct Candidate<'a> {
    name: &'a str,
    lower_name: String,
    code: &'a str,
}

/// Evaluated top to bottom; the first rule that decides wins
const RULES: &[Rule] = &[
    reject_structural_name,
    accept_role_keyword,
    accept_typed_interactive_markup,
    accept_exported_markup,
];

/// @acp:summary "Check whether a declaration is worth extracting as a reusable unit"
pub fn is_reusable(name: &str, code: &str) -> bool {
    let candidate = Candidate {
        name,
        lower_name: name.to_lowercase(),
        code,
    };

    let verdict = RULES
        .iter()
        .find_map(|rule| rule(&candidate))
        .unwrap_or(Verdict::Reject);

    tracing::debug!("reusability of {}: {:?}", name, verdict);
    verdict == Verdict::Accept
}

/// Whether the code returns a markup expression
pub fn returns_markup(code: &str) -> bool {
    RETURNS_MARKUP.is_match(code)
}

fn reject_structural_name(c: &Candidate<'_>) -> Option<Verdict> {
    STRUCTURAL_NAMES
        .contains(&c.lower_name.as_str())
        .then_some(Verdict::Reject)
}

fn accept_role_keyword(c: &Candidate<'_>) -> Option<Verdict> {
    REUSABLE_KEYWORDS
        .iter()
        .any(|k| c.lower_name.contains(k))
        .then_some(Verdict::Accept)
}

fn accept_typed_interactive_markup(c: &Candidate<'_>) -> Option<Verdict> {
    (returns_markup(c.code) && TYPED_PROPS.is_match(c.code) && INTERACTIVE_MARKUP.is_match(c.code))
        .then_some(Verdict::Accept)
}

fn accept_exported_markup(c: &Candidate<'_>) -> Option<Verdict> {
    (c.code.contains("export") && returns_markup(c.code) && c.name.chars().count() > 2)
        .then_some(Verdict::Accept)
}
