//! @acp:module "Template Audit"
//! @acp:summary "Batch quality scoring and component detection over a template directory"
//! @acp:domain quality
//! @acp:layer service
//!
//! Walks a directory, keeps files matching the configured include globs and
//! none of the exclude globs, then scores and scans each template in
//! parallel. Every per-file step is pure, so files are processed
//! independently.

use std::path::Path;

use chrono::{DateTime, Utc};
use glob::Pattern;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{CarveError, Result};
use crate::quality::{score_quality, QualityReport};
use crate::scan::{detect_components, DeclarationSpan};

/// @acp:summary "Audit result for one template file"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateAudit {
    /// Path relative to the audit root
    pub path: String,
    /// SHA-256 of the file content, hex encoded
    pub content_hash: String,
    pub quality: QualityReport,
    /// Whether the template clears the configured quality gates
    pub passes: bool,
    /// Reusable components detected in the template
    pub components: Vec<DeclarationSpan>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub templates: usize,
    pub passing: usize,
    pub average_score: f64,
    pub components: usize,
}

/// @acp:summary "Audit result for a whole template directory"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub root: String,
    pub min_score: u32,
    pub templates: Vec<TemplateAudit>,
    pub summary: AuditSummary,
}

impl AuditReport {
    /// Write the report as pretty-printed JSON
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// @acp:summary "Template directory auditor with parallel file processing"
pub struct Auditor {
    config: Config,
}

impl Auditor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// @acp:summary "Score and scan every template under root"
    pub fn audit<P: AsRef<Path>>(&self, root: P) -> Result<AuditReport> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(CarveError::Other(format!(
                "Audit root is not a directory: {}",
                root.display()
            )));
        }

        let files = self.find_files(root);
        tracing::info!("Auditing {} template(s) under {}", files.len(), root.display());

        let min_score = self.config.quality.min_score;
        let mut templates: Vec<TemplateAudit> = files
            .par_iter()
            .filter_map(|relative| {
                let full = root.join(relative);
                match std::fs::read_to_string(&full) {
                    Ok(source) => Some(audit_template(relative, &source, min_score)),
                    Err(e) => {
                        tracing::warn!("Skipping unreadable template {}: {}", full.display(), e);
                        None
                    }
                }
            })
            .collect();

        templates.sort_by(|a, b| a.path.cmp(&b.path));
        let summary = summarize(&templates);

        Ok(AuditReport {
            generated_at: Utc::now(),
            root: root.to_string_lossy().to_string(),
            min_score,
            templates,
            summary,
        })
    }

    /// Relative paths of files matching include and not exclude patterns
    fn find_files(&self, root: &Path) -> Vec<String> {
        let include_patterns: Vec<_> = self
            .config
            .include
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();

        let exclude_patterns: Vec<_> = self
            .config
            .exclude
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();

        let match_opts = glob::MatchOptions {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };

        WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let relative = e
                    .path()
                    .strip_prefix(root)
                    .map(|p| p.to_string_lossy().to_string())
                    .ok()?;

                let included = include_patterns.is_empty()
                    || include_patterns.iter().any(|p| p.matches_with(&relative, match_opts));
                let excluded = exclude_patterns.iter().any(|p| p.matches_with(&relative, match_opts));

                (included && !excluded).then_some(relative)
            })
            .collect()
    }
}

/// Score and scan a single template's source
pub fn audit_template(path: &str, source: &str, min_score: u32) -> TemplateAudit {
    let quality = score_quality(source);
    let passes = quality.meets_standard(min_score);

    TemplateAudit {
        path: path.to_string(),
        content_hash: format!("{:x}", Sha256::digest(source.as_bytes())),
        quality,
        passes,
        components: detect_components(source),
    }
}

fn summarize(templates: &[TemplateAudit]) -> AuditSummary {
    if templates.is_empty() {
        return AuditSummary::default();
    }

    let total: u32 = templates.iter().map(|t| t.quality.score).sum();
    AuditSummary {
        templates: templates.len(),
        passing: templates.iter().filter(|t| t.passes).count(),
        average_score: f64::from(total) / templates.len() as f64,
        components: templates.iter().map(|t| t.components.len()).sum(),
    }
}
