//! @acp:module "Quality Scorer"
//! @acp:summary "Scores whole-template source against production-readiness checks"
//! @acp:domain quality
//! @acp:layer logic
//!
//! # Scoring
//!
//! Scoring starts at 100. Every check runs regardless of earlier failures
//! and deducts independently; the total is floored at 0.
//!
//! | Check | Deduction |
//! |---|---|
//! | runtime safety | 5 per issue |
//! | responsive breakpoints | 20 |
//! | typography hierarchy | 15 |
//! | color palette | 10 |
//! | customizable content | 15 |
//! | performance | 10 |
//! | documentation | 10 |
//! | type annotations | 10 |
//! | safe assets | 20 |
//!
//! Responsive design and typography hierarchy are also hard gates: a
//! template failing either is rejected whatever its score, see
//! [`QualityReport::meets_standard`].

pub mod report;
pub mod safety;

pub use report::render_markdown;
pub use safety::{is_runtime_safe, runtime_safety_issues};

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default minimum score for a sellable template
pub const DEFAULT_MIN_SCORE: u32 = 80;

const MAX_SCORE: i64 = 100;

const RUNTIME_ISSUE_PENALTY: i64 = 5;
const RESPONSIVE_PENALTY: i64 = 20;
const TYPOGRAPHY_PENALTY: i64 = 15;
const COLOR_PENALTY: i64 = 10;
const CUSTOMIZABLE_PENALTY: i64 = 15;
const PERFORMANCE_PENALTY: i64 = 10;
const DOCUMENTATION_PENALTY: i64 = 10;
const TYPES_PENALTY: i64 = 10;
const ASSETS_PENALTY: i64 = 20;

const MIN_BREAKPOINTS: usize = 3;
const MIN_TEXT_SIZES: usize = 3;
const MIN_FONT_WEIGHTS: usize = 2;

static BREAKPOINT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"sm:|md:|lg:").unwrap());

static TEXT_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"text-(xs|sm|base|lg|xl|2xl|3xl|4xl|5xl|6xl)").unwrap()
});

static FONT_WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"font-(thin|light|normal|medium|semibold|bold)").unwrap()
});

static COLOR_PALETTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"bg-(slate|gray|zinc|neutral|stone|red|orange|amber|yellow|lime|green|emerald|teal|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose)",
    )
    .unwrap()
});

static CUSTOMIZABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)interface.*Props|const.*=.*\{|placeholder|Your |Add your").unwrap()
});

static CHEAP_ANIMATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)useMemo|useCallback|transform|opacity|will-change").unwrap()
});

static LAYOUT_ANIMATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)animate.*left|animate.*top|animate.*width|animate.*height").unwrap()
});

static DOC_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/\*\*|//.*customize|//.*section|//.*example").unwrap()
});

static TYPE_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)interface|type.*=|:.*\{|:.*string|:.*number").unwrap()
});

static COPYRIGHT_NOTICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"copyright|©|all rights reserved").unwrap());

static SAFE_ASSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"placeholder|via\.placeholder|heroicons|lucide|system font").unwrap()
});

/// @acp:summary "Scored, itemized production-readiness result for one template"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    /// 0 to 100
    pub score: u32,
    pub has_responsive_design: bool,
    pub has_typography_hierarchy: bool,
    pub has_color_palette: bool,
    pub has_customizable_content: bool,
    pub has_performance_optimization: bool,
    pub has_documentation: bool,
    pub has_type_annotations: bool,
    pub uses_safe_assets: bool,
    pub issues: Vec<String>,
}

impl QualityReport {
    /// Hard gates plus the score threshold
    pub fn meets_standard(&self, min_score: u32) -> bool {
        self.score >= min_score && self.has_responsive_design && self.has_typography_hierarchy
    }

    /// Named pass/fail for each check, in report order
    pub fn checks(&self) -> [(&'static str, bool); 8] {
        [
            ("Responsive Design", self.has_responsive_design),
            ("Typography Hierarchy", self.has_typography_hierarchy),
            ("Color Palette", self.has_color_palette),
            ("Customizable Content", self.has_customizable_content),
            ("Performance Optimization", self.has_performance_optimization),
            ("Documentation", self.has_documentation),
            ("TypeScript Types", self.has_type_annotations),
            ("Safe Assets (Licensing)", self.uses_safe_assets),
        ]
    }
}

/// Running score and issue list
struct Scorecard {
    score: i64,
    issues: Vec<String>,
}

impl Scorecard {
    fn new() -> Self {
        Self {
            score: MAX_SCORE,
            issues: Vec::new(),
        }
    }

    /// Record a check; deducts `penalty` and adds the issue when it failed
    fn check(&mut self, passed: bool, penalty: i64, issue: impl FnOnce() -> String) -> bool {
        if !passed {
            self.issues.push(issue());
            self.score -= penalty;
        }
        passed
    }

    fn final_score(&self) -> u32 {
        self.score.clamp(0, MAX_SCORE) as u32
    }
}

/// @acp:summary "Score a full template against every production-readiness check"
pub fn score_quality(source: &str) -> QualityReport {
    let mut card = Scorecard::new();

    let runtime_issues = runtime_safety_issues(source);
    card.score -= runtime_issues.len() as i64 * RUNTIME_ISSUE_PENALTY;
    card.issues.extend(runtime_issues);

    let breakpoints = BREAKPOINT.find_iter(source).count();
    let has_responsive_design = card.check(breakpoints >= MIN_BREAKPOINTS, RESPONSIVE_PENALTY, || {
        format!(
            "Missing responsive design utilities (sm:, md:, lg:) - found only {} breakpoint(s), need at least {}",
            breakpoints, MIN_BREAKPOINTS
        )
    });

    let text_sizes = distinct_matches(&TEXT_SIZE, source);
    let font_weights = distinct_matches(&FONT_WEIGHT, source);
    let has_typography_hierarchy = card.check(
        text_sizes >= MIN_TEXT_SIZES && font_weights >= MIN_FONT_WEIGHTS,
        TYPOGRAPHY_PENALTY,
        || {
            format!(
                "Missing typography hierarchy (text-*, font-* classes) - found {} unique text size(s) and {} unique font weight(s), need at least {} and {}",
                text_sizes, font_weights, MIN_TEXT_SIZES, MIN_FONT_WEIGHTS
            )
        },
    );

    let has_color_palette = card.check(COLOR_PALETTE.is_match(source), COLOR_PENALTY, || {
        "Missing color palette (bg-*, text-* color classes)".to_string()
    });

    let has_customizable_content = card.check(CUSTOMIZABLE.is_match(source), CUSTOMIZABLE_PENALTY, || {
        "Missing customizable content (props, placeholders)".to_string()
    });

    let performant = CHEAP_ANIMATION.is_match(source) && !LAYOUT_ANIMATION.is_match(source);
    let has_performance_optimization = card.check(performant, PERFORMANCE_PENALTY, || {
        "May have performance issues (animating layout properties)".to_string()
    });

    let has_documentation = card.check(DOC_COMMENT.is_match(source), DOCUMENTATION_PENALTY, || {
        "Missing documentation comments".to_string()
    });

    let has_type_annotations = card.check(TYPE_ANNOTATION.is_match(source), TYPES_PENALTY, || {
        "Missing TypeScript type definitions".to_string()
    });

    let lower = source.to_lowercase();
    let safe_assets = !COPYRIGHT_NOTICE.is_match(&lower) && SAFE_ASSET.is_match(&lower);
    let uses_safe_assets = card.check(safe_assets, ASSETS_PENALTY, || {
        "May contain copyrighted assets - verify licensing".to_string()
    });

    let report = QualityReport {
        score: card.final_score(),
        has_responsive_design,
        has_typography_hierarchy,
        has_color_palette,
        has_customizable_content,
        has_performance_optimization,
        has_documentation,
        has_type_annotations,
        uses_safe_assets,
        issues: card.issues,
    };

    tracing::debug!("quality score {} with {} issue(s)", report.score, report.issues.len());
    report
}

fn distinct_matches(pattern: &Regex, source: &str) -> usize {
    pattern
        .find_iter(source)
        .map(|m| m.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Passes every check with no runtime issues
    pub(crate) const PASSING_TEMPLATE: &str = r#"// Customize the hero copy below
interface HeroProps {
  headline: string
}

export default function Hero({ headline }: HeroProps) {
  return (
    <section className="bg-slate-900 sm:px-6 md:px-8 lg:px-12">
      <h1 className="text-4xl font-bold">{headline}</h1>
      <h2 className="text-2xl font-semibold">Subheading</h2>
      <p className="text-lg">Body copy</p>
      <p className="text-sm">Fine print</p>
      <div className="transition-transform hover:scale-105" />
      <img src="https://via.placeholder.com/600x400" alt="" />
    </section>
  )
}
"#;

    #[test]
    fn test_passing_template_scores_100() {
        let report = score_quality(PASSING_TEMPLATE);
        assert_eq!(report.issues, Vec::<String>::new());
        assert_eq!(report.score, 100);
        assert!(report.meets_standard(DEFAULT_MIN_SCORE));
    }

    #[test]
    fn test_empty_source_floors_at_zero() {
        let report = score_quality("");
        assert_eq!(report.score, 0);
        assert_eq!(report.issues.len(), 8);
        assert!(!report.meets_standard(0));
    }

    #[test]
    fn test_responsive_and_typography_deductions() {
        let source = PASSING_TEMPLATE
            .replace("sm:px-6 md:px-8 lg:px-12", "px-6")
            .replace("text-2xl ", "")
            .replace("text-lg", "")
            .replace("text-sm", "");
        let report = score_quality(&source);
        assert!(!report.has_responsive_design);
        assert!(!report.has_typography_hierarchy);
        assert_eq!(report.score, 100 - 20 - 15);
        assert!(report.issues[0].contains("found only 0 breakpoint(s)"));
        assert!(report.issues[1].contains("found 1 unique text size(s)"));
    }

    #[test]
    fn test_typography_counts_distinct_tokens() {
        let repeated = PASSING_TEMPLATE
            .replace("text-2xl", "text-4xl")
            .replace("text-lg", "text-4xl")
            .replace("text-sm", "text-4xl");
        assert!(!score_quality(&repeated).has_typography_hierarchy);
    }

    #[test]
    fn test_hard_gates_independent_of_score() {
        let source = PASSING_TEMPLATE.replace("sm:px-6 md:px-8 lg:px-12", "px-6");
        let report = score_quality(&source);
        assert_eq!(report.score, 80);
        assert!(!report.meets_standard(80));
        assert!(!report.meets_standard(0));
    }

    #[test]
    fn test_layout_animation_fails_performance() {
        let source = format!("{}\n<motion.div animate={{{{ width: 200 }}}} />", PASSING_TEMPLATE);
        let report = score_quality(&source);
        assert!(!report.has_performance_optimization);
    }

    #[test]
    fn test_copyright_fails_assets() {
        let source = format!("{}\n<footer>© 2024 Acme</footer>", PASSING_TEMPLATE);
        let report = score_quality(&source);
        assert!(!report.uses_safe_assets);
        assert_eq!(report.score, 80);
    }

    #[test]
    fn test_runtime_issues_deduct_five_each() {
        let source = format!("{}\n<p>{{a.b}}</p><p>{{c.d}}</p>", PASSING_TEMPLATE);
        let report = score_quality(&source);
        assert_eq!(report.score, 90);
        assert_eq!(report.issues.len(), 2);
    }

    #[test]
    fn test_violations_never_increase_score() {
        let violations = [
            "\n<p>{post.title}</p>",
            "\n{list.map((x) => x)}",
            "\n<p>All rights reserved</p>",
            "\n<div animate=\"top\" />",
            "\n<p>{item.content}</p>",
        ];
        let mut source = PASSING_TEMPLATE.to_string();
        let mut previous = score_quality(&source).score;
        for violation in violations {
            source.push_str(violation);
            let score = score_quality(&source).score;
            assert!(score <= previous, "score rose after adding {:?}", violation);
            previous = score;
        }
        assert!(previous < 100);
    }
}
