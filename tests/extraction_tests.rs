//! Extraction integration tests
//!
//! Scanning, classification, extraction and metadata synthesis through the
//! public library surface.

use carve::classify::ComponentType;
use carve::metadata::{base_price, MAX_COMPONENT_PRICE};
use carve::{
    classify_type, detect_components, extract_code, is_reusable, scan_declarations,
    standaloneify, suggest_price, synthesize_tags, CarveError, DescriptionContext,
    DescriptionGenerator, ExtractionRequest, Extractor,
};
use pretty_assertions::assert_eq;

const HERO_SOURCE: &str = r#"export function HeroBanner() {
  return (
    <div>
      <h1>Build faster</h1>
      <button>Get started</button>
    </div>
  )
}"#;

const MIXED_SOURCE: &str = r#"const PricingCard = ({ plan }) => {
  const label = `${plan.price}/mo`
  return <div className="shadow rounded">{label}</div>
}

const Wrapper = ({ children }) => {
  return <div className="wrapper">{children}</div>
}

export function TestimonialQuote({ author }) {
  if (!author) {
    return null
  }
  return <blockquote>{author}</blockquote>
}

export default function App() {
  return (
    <main>
      <PricingCard plan={{ price: 9 }} />
      <TestimonialQuote author="Ada" />
    </main>
  )
}"#;

fn brace_counts(text: &str) -> (usize, usize) {
    (
        text.chars().filter(|c| *c == '{').count(),
        text.chars().filter(|c| *c == '}').count(),
    )
}

// =============================================================================
// Boundary scanning
// =============================================================================

mod scanning_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_hero_declaration() {
        let spans = scan_declarations(HERO_SOURCE);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].name, "HeroBanner");
        assert_eq!((spans[0].start_line, spans[0].end_line), (1, 8));

        let text = spans[0].text(HERO_SOURCE);
        assert!(is_reusable(&spans[0].name, &text));
        assert_eq!(classify_type(&text, &spans[0].name), ComponentType::Hero);
    }

    #[test]
    fn test_spans_in_source_order_without_root() {
        let names: Vec<_> = scan_declarations(MIXED_SOURCE)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["PricingCard", "Wrapper", "TestimonialQuote"]);
    }

    #[test]
    fn test_every_span_is_brace_balanced() {
        for source in [HERO_SOURCE, MIXED_SOURCE] {
            for span in scan_declarations(source) {
                let (open, close) = brace_counts(&span.text(source));
                assert_eq!(open, close, "unbalanced span {}", span.name);
            }
        }
    }

    #[test]
    fn test_braces_in_string_literals_are_counted() {
        let source = "function FeatureGrid() {\n  return <div>{\"{\"}</div>\n}\n";
        assert!(scan_declarations(source).is_empty());
    }

    #[test]
    fn test_wrapper_found_but_not_reusable() {
        let spans = scan_declarations(MIXED_SOURCE);
        let wrapper = spans.iter().find(|s| s.name == "Wrapper").unwrap();
        assert!(!is_reusable(&wrapper.name, &wrapper.text(MIXED_SOURCE)));

        let detected: Vec<_> = detect_components(MIXED_SOURCE)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(detected, vec!["PricingCard", "TestimonialQuote"]);
    }

    #[test]
    fn test_unparsable_text_yields_nothing() {
        assert!(scan_declarations("}}}{{{ not code").is_empty());
        assert!(scan_declarations("").is_empty());
    }
}

// =============================================================================
// Classification
// =============================================================================

mod classification_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reusable_is_deterministic() {
        for (name, code) in [
            ("HeroBanner", HERO_SOURCE),
            ("Wrapper", HERO_SOURCE),
            ("Xy", "export const Xy = () => { return <div /> }"),
        ] {
            let first = is_reusable(name, code);
            assert_eq!(first, is_reusable(name, code));
        }
    }

    #[test]
    fn test_classify_always_in_taxonomy() {
        let inputs = [
            ("", ""),
            ("Thing", "<section>hi</section>"),
            ("Widget", "<button><a href=\"/\">go</a></button>"),
            ("Unknown", "plain text"),
            ("SiteFooter", ""),
        ];
        for (name, code) in inputs {
            let kind = classify_type(code, name);
            assert!(ComponentType::ALL.contains(&kind));
        }
        assert_eq!(classify_type("plain text", "Unknown"), ComponentType::Other);
    }
}

// =============================================================================
// Extraction
// =============================================================================

mod extraction_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn twenty_lines() -> String {
        (1..=20)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_explicit_lines_win() {
        let source = twenty_lines();
        assert_eq!(
            extract_code(&source, "NotThere", Some(10), Some(14)),
            "line 10\nline 11\nline 12\nline 13\nline 14"
        );
    }

    #[test]
    fn test_named_extraction_stops_at_closing_brace() {
        let code = extract_code(MIXED_SOURCE, "TestimonialQuote", None, None);
        assert!(code.starts_with("export function TestimonialQuote({ author }) {"));
        assert!(code.ends_with("return <blockquote>{author}</blockquote>\n}"));
        assert!(!code.contains("App"));
    }

    #[test]
    fn test_never_empty_for_non_empty_input() {
        for (source, name) in [
            ("just some text", "Missing"),
            ("a\nb\nc", ""),
            (MIXED_SOURCE, "Nothing"),
        ] {
            assert!(!extract_code(source, name, None, None).is_empty());
        }
        assert_eq!(extract_code("just some text", "Missing", None, None), "just some text");
    }

    #[test]
    fn test_standaloneify_prepends_imports() {
        let code = standaloneify(HERO_SOURCE, "HeroBanner");
        assert!(code.starts_with(
            "import { motion } from 'framer-motion'\nimport React from 'react'\n\n"
        ));
        assert!(code.ends_with(HERO_SOURCE));
    }
}

// =============================================================================
// Metadata and the extraction pipeline
// =============================================================================

mod pipeline_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use carve::config::ExtractionConfig;

    struct Unavailable;

    impl DescriptionGenerator for Unavailable {
        fn describe(&self, _context: &DescriptionContext<'_>) -> carve::Result<String> {
            Err(CarveError::Generator("timed out".to_string()))
        }
    }

    struct Copywriter;

    impl DescriptionGenerator for Copywriter {
        fn describe(&self, context: &DescriptionContext<'_>) -> carve::Result<String> {
            Ok(format!("  {} that converts.  ", context.name))
        }
    }

    #[test]
    fn test_price_within_bounds() {
        let long = format!("useState {}", "x".repeat(2000));
        let codes = ["", "<div />", "motion.div useEffect", long.as_str()];
        for kind in ComponentType::ALL {
            for code in codes {
                let price = suggest_price(kind, code);
                assert!(price >= base_price(kind));
                assert!(price <= MAX_COMPONENT_PRICE);
            }
        }
    }

    #[test]
    fn test_tags_capped_and_unique() {
        let tags = synthesize_tags(
            ComponentType::Card,
            "Minimal Clean Dark Tech Playful Retro",
            "motion.div md:flex hover:bg-blue-500 bg-gradient-to-r",
        );
        assert!(tags.len() <= 8);
        assert_eq!(tags[0], "card");
        let mut unique = tags.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn test_failing_generator_falls_back() {
        let extractor = Extractor::new(&ExtractionConfig::default()).with_generator(Box::new(Unavailable));
        let unit = extractor
            .extract(&ExtractionRequest::new(HERO_SOURCE, "HeroBanner").with_style("Retro"))
            .unwrap();
        assert_eq!(unit.description, "A hero component in Retro style. Ready to use.");
    }

    #[test]
    fn test_generator_output_is_trimmed() {
        let extractor = Extractor::new(&ExtractionConfig::default()).with_generator(Box::new(Copywriter));
        let unit = extractor
            .extract(&ExtractionRequest::new(HERO_SOURCE, "HeroBanner"))
            .unwrap();
        assert_eq!(unit.description, "HeroBanner that converts.");
    }

    #[test]
    fn test_pipeline_extracts_from_mixed_template() {
        let extractor = Extractor::new(&ExtractionConfig::default());
        let unit = extractor
            .extract(&ExtractionRequest::new(MIXED_SOURCE, "PricingCard"))
            .unwrap();

        assert_eq!(unit.component_type, ComponentType::Card);
        assert!(unit.code.contains("export const PricingCard = ({ plan }) => {"));
        assert!(!unit.code.contains("Wrapper"));
        assert!(unit.price >= base_price(ComponentType::Card));
    }

    #[test]
    fn test_pipeline_rejects_empty_code() {
        let extractor = Extractor::new(&ExtractionConfig::default());
        let err = extractor
            .extract(&ExtractionRequest::new("   ", "Hero"))
            .unwrap_err();
        assert!(matches!(err, CarveError::MissingField("code")));
    }
}
