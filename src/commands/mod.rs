//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod audit;
pub mod classify;
pub mod extract;
pub mod init;
pub mod quality;
pub mod scan;

pub use audit::{execute_audit, AuditOptions};
pub use classify::{classify_source, execute_classify, Classification, ClassifyOptions};
pub use extract::{execute_extract, ExtractOptions};
pub use init::{execute_init, InitOptions};
pub use quality::{execute_quality, QualityOptions};
pub use scan::{execute_scan, scan_source, ScanOptions, ScannedComponent};
