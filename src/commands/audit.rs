//! @acp:module "Audit Command"
//! @acp:summary "Score and scan every template in a directory"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::audit::{AuditReport, Auditor};
use crate::config::Config;

/// Options for the audit command
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Directory of templates
    pub root: PathBuf,
    /// Write the full report as JSON here
    pub output: Option<PathBuf>,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: None,
        }
    }
}

/// Execute the audit command
pub fn execute_audit(options: AuditOptions, config: Config) -> Result<AuditReport> {
    println!("{} Auditing templates...", style("→").cyan());

    let report = Auditor::new(config)
        .audit(&options.root)
        .with_context(|| format!("Failed to audit {}", options.root.display()))?;

    if report.templates.is_empty() {
        eprintln!(
            "{} No templates found under {}",
            style("✗").red(),
            options.root.display()
        );
        return Ok(report);
    }

    for template in &report.templates {
        let marker = if template.passes {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!(
            "  {} {:>3}/100 {} ({} component(s))",
            marker,
            template.quality.score,
            template.path,
            template.components.len()
        );
    }

    let summary = &report.summary;
    println!(
        "\n{} {} template(s), {} passing (min score {}), average {:.1}, {} component(s)",
        style("→").cyan(),
        summary.templates,
        summary.passing,
        report.min_score,
        summary.average_score,
        summary.components
    );

    if let Some(path) = &options.output {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("{} Wrote {}", style("✓").green(), path.display());
    }

    Ok(report)
}
