//! @acp:module "Extract Command"
//! @acp:summary "Carve one component out of a template as a standalone unit"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::extract::{ExtractionRequest, Extractor};

/// Options for the extract command
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Template file to extract from
    pub file: PathBuf,
    /// Component name
    pub name: String,
    /// First line of a manual selection (1-indexed)
    pub start: Option<usize>,
    /// Last line of a manual selection (inclusive)
    pub end: Option<usize>,
    /// Template style, defaults to the configured style
    pub style: Option<String>,
    /// Marketplace category
    pub category: Option<String>,
    /// Write the unit as JSON here instead of stdout
    pub output: Option<PathBuf>,
}

/// Execute the extract command
pub fn execute_extract(options: ExtractOptions, config: &Config) -> Result<()> {
    let code = std::fs::read_to_string(&options.file)
        .with_context(|| format!("Failed to read {}", options.file.display()))?;

    let request = ExtractionRequest {
        template_id: None,
        component_name: options.name,
        code,
        start_line: options.start,
        end_line: options.end,
        style: options.style,
        category: options.category,
    };

    let unit = Extractor::new(&config.extraction)
        .extract(&request)
        .context("Extraction failed")?;
    let json = serde_json::to_string_pretty(&unit)?;

    match options.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} Extracted {} ({}, ${}) to {}",
                style("✓").green(),
                style(&unit.name).bold(),
                unit.component_type,
                unit.price,
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
