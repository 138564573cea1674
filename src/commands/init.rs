//! @acp:module "Init Command"
//! @acp:summary "Write a default carve configuration"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `carve init`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use console::style;

use crate::config::{Config, CONFIG_FILE};

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Config file to create
    pub path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Default style for extraction requests that name none
    pub style: Option<String>,
    /// Minimum quality score
    pub min_score: Option<u32>,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(CONFIG_FILE),
            force: false,
            style: None,
            min_score: None,
        }
    }
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            options.path.display()
        );
    }

    let mut config = Config::default();
    if let Some(style) = options.style {
        config.extraction.default_style = style;
    }
    if let Some(min_score) = options.min_score {
        config.quality.min_score = min_score.min(100);
    }

    config
        .save(&options.path)
        .with_context(|| format!("Failed to write {}", options.path.display()))?;
    println!("{} Created {}", style("✓").green(), options.path.display());

    Ok(())
}
