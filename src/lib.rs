#![forbid(unsafe_code)]

//! @acp:module "Carve Library"
//! @acp:summary "Carve reusable components out of generated UI templates"
//! @acp:domain extraction
//! @acp:layer api
//! @acp:stability experimental
//!
//! # Carve
//!
//! Takes machine-generated component source, finds the component
//! declarations in it, decides which are worth selling on their own,
//! extracts them as standalone units with a type, tags, price and
//! description, and scores whole templates for production readiness.
//!
//! ## Features
//!
//! - **Shallow by design**: line patterns and brace depth, no syntax tree
//! - **Ordered rules**: reusability and type classification are first-match-wins tables
//! - **Never fails on input**: every core function degrades to a safe default
//! - **Quality gates**: scored report plus hard responsive/typography gates
//!
//! ## Example
//!
//! ```rust
//! use carve::{classify_type, detect_components, score_quality, ComponentType};
//!
//! let source = "export function HeroBanner() {\n  return <h1>Hi</h1>\n}";
//!
//! let spans = detect_components(source);
//! assert_eq!(spans[0].name, "HeroBanner");
//! assert_eq!(classify_type(source, "HeroBanner"), ComponentType::Hero);
//!
//! let report = score_quality(source);
//! assert!(!report.has_responsive_design);
//! ```

pub mod audit;
pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod metadata;
pub mod quality;
pub mod scan;

// Re-exports
pub use audit::{AuditReport, AuditSummary, Auditor, TemplateAudit};
pub use classify::{classify_type, is_reusable, ComponentType};
pub use config::Config;
pub use error::{CarveError, Result};
pub use extract::{extract_code, standaloneify, ExtractedUnit, ExtractionRequest, Extractor};
pub use metadata::{
    describe_component, fallback_description, suggest_price, synthesize_tags,
    DescriptionContext, DescriptionGenerator,
};
pub use quality::{render_markdown, score_quality, QualityReport};
pub use scan::{detect_components, scan_declarations, DeclarationSpan};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
