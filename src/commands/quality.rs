//! @acp:module "Quality Command"
//! @acp:summary "Score a template for production readiness"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::quality::{render_markdown, score_quality};

/// Options for the quality command
#[derive(Debug, Clone)]
pub struct QualityOptions {
    /// Template file to score
    pub file: PathBuf,
    /// Output as JSON
    pub json: bool,
    /// Report title, defaults to the file name
    pub title: Option<String>,
}

/// Execute the quality command
///
/// Returns whether the template clears the configured quality gates.
pub fn execute_quality(options: QualityOptions, config: &Config) -> Result<bool> {
    let source = std::fs::read_to_string(&options.file)
        .with_context(|| format!("Failed to read {}", options.file.display()))?;

    let report = score_quality(&source);
    let min_score = config.quality.min_score;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let title = options.title.unwrap_or_else(|| {
            options
                .file
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default()
        });
        print!("{}", render_markdown(&report, &title, min_score));
    }

    Ok(report.meets_standard(min_score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_quality_reports_gate_failure() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.tsx");
        std::fs::write(&file, "export default function App() { return <div /> }").unwrap();

        let passed = execute_quality(
            QualityOptions {
                file,
                json: true,
                title: None,
            },
            &Config::default(),
        )
        .unwrap();
        assert!(!passed);
    }
}
