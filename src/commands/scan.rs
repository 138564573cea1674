//! @acp:module "Scan Command"
//! @acp:summary "List component declarations found in a template"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use crate::classify::{classify_type, is_reusable, ComponentType};
use crate::scan::{scan_declarations, DeclarationSpan};

/// Options for the scan command
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Template file to scan
    pub file: PathBuf,
    /// Include declarations that are not judged reusable
    pub all: bool,
    /// Output as JSON
    pub json: bool,
}

/// One scanned declaration with its classification
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedComponent {
    #[serde(flatten)]
    pub span: DeclarationSpan,
    pub component_type: ComponentType,
    pub reusable: bool,
}

/// Scan source and classify every declaration
pub fn scan_source(source: &str, all: bool) -> Vec<ScannedComponent> {
    scan_declarations(source)
        .into_iter()
        .filter_map(|span| {
            let text = span.text(source);
            let reusable = is_reusable(&span.name, &text);
            if !reusable && !all {
                return None;
            }
            Some(ScannedComponent {
                component_type: classify_type(&text, &span.name),
                reusable,
                span,
            })
        })
        .collect()
}

/// Execute the scan command
pub fn execute_scan(options: ScanOptions) -> Result<()> {
    let source = std::fs::read_to_string(&options.file)
        .with_context(|| format!("Failed to read {}", options.file.display()))?;

    let components = scan_source(&source, options.all);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&components)?);
        return Ok(());
    }

    if components.is_empty() {
        println!("{} No components found in {}", style("•").dim(), options.file.display());
        return Ok(());
    }

    println!(
        "{} {} component(s) in {}:\n",
        style("→").cyan(),
        components.len(),
        options.file.display()
    );
    for component in &components {
        let marker = if component.reusable {
            style("✓").green()
        } else {
            style("•").dim()
        };
        println!(
            "  {} {} {} ({})",
            marker,
            style(&component.span.name).bold(),
            style(format!(
                "lines {}-{}, {} lines",
                component.span.start_line,
                component.span.end_line,
                component.span.line_count()
            ))
            .dim(),
            component.component_type
        );
    }

    Ok(())
}
