//! @acp:module "Errors"
//! @acp:summary "Error types for the fallible edges of the extraction toolkit"
//! @acp:domain cli
//! @acp:layer model
//!
//! The scanning, classification and scoring functions never fail; they
//! degrade to safe defaults. Errors only arise from I/O, configuration,
//! malformed extraction requests, and external collaborators.

use thiserror::Error;

/// @acp:summary "Crate-wide error type"
#[derive(Debug, Error)]
pub enum CarveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid line range {start}..={end}: lines are 1-indexed and start must not exceed end")]
    InvalidLineRange { start: usize, end: usize },

    #[error("Description generator failed: {0}")]
    Generator(String),

    #[error("{0}")]
    Other(String),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, CarveError>;
