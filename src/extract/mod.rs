//! @acp:module "Extraction"
//! @acp:summary "Slices a component out of template source and makes it standalone"
//! @acp:domain extraction
//! @acp:layer service
//!
//! - [`extract_code`]: ordered first-success strategies, never empty for
//!   non-empty input
//! - [`standaloneify`]: injects imports and an export where missing
//! - [`Extractor`]: the full request → [`ExtractedUnit`] pipeline

pub mod pipeline;
pub mod standalone;
pub mod strategy;

pub use pipeline::{ExtractedUnit, ExtractionRequest, Extractor};
pub use standalone::{standaloneify, STANDALONE_IMPORTS};
pub use strategy::extract_code;
