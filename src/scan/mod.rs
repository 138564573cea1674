//! @acp:module "Boundary Scanner"
//! @acp:summary "Locates candidate component declarations by line pattern and brace depth"
//! @acp:domain extraction
//! @acp:layer logic
//!
//! # Declaration Scanning Algorithm
//!
//! 1. **Match** each line against the declaration-start pattern
//!    (optional `export`, then `const`/`function`, then a capitalized name,
//!    then `=`/`:`/`(`/`{`)
//! 2. **Count** braces character by character from the start line
//! 3. **Open** once depth first exceeds zero
//! 4. **Close** at the first later line where depth is back to zero
//!
//! This is not a tokenizer: braces inside strings, template literals and
//! comments are counted like structural braces. Declarations whose first
//! line has no `{` (implicit-return arrows) never open and are skipped, as
//! are declarations still open at end of input.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::classify::is_reusable;

/// Declaration start: optional export qualifier, `const`/`function`, capitalized name
static DECLARATION_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:export\s+(?:default\s+)?)?(?:const|function)\s+([A-Z][a-zA-Z0-9]*)\s*[=:]?\s*[({]")
        .unwrap()
});

/// Names the scanner never reports (root component, placeholders)
pub const SCANNER_SKIP_NAMES: &[&str] = &["app", "component", "default"];

/// @acp:summary "Line range believed to hold one top-level component declaration"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationSpan {
    pub name: String,
    /// 1-indexed, inclusive
    pub start_line: usize,
    /// 1-indexed, inclusive
    pub end_line: usize,
}

impl DeclarationSpan {
    /// Number of lines covered by the span
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// The span's text within `source`
    pub fn text(&self, source: &str) -> String {
        slice_lines(source, self.start_line, self.end_line)
    }
}

/// @acp:summary "Scan source text for top-level component declarations"
/// Returns spans in source order. Never fails; unparsable text yields `[]`.
pub fn scan_declarations(source: &str) -> Vec<DeclarationSpan> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut spans = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(caps) = DECLARATION_START.captures(line) else {
            continue;
        };
        let name = &caps[1];

        if SCANNER_SKIP_NAMES.contains(&name.to_lowercase().as_str()) {
            tracing::debug!("skipping declaration {} at line {}", name, idx + 1);
            continue;
        }

        match find_balanced_end(&lines, idx) {
            Some(end) => spans.push(DeclarationSpan {
                name: name.to_string(),
                start_line: idx + 1,
                end_line: end + 1,
            }),
            None => tracing::debug!("declaration {} at line {} never closes", name, idx + 1),
        }
    }

    spans
}

/// @acp:summary "Scan and keep only declarations judged reusable"
pub fn detect_components(source: &str) -> Vec<DeclarationSpan> {
    scan_declarations(source)
        .into_iter()
        .filter(|span| is_reusable(&span.name, &span.text(source)))
        .collect()
}

/// Find the 0-indexed line where the brace depth opened on `start` returns to zero.
///
/// Returns `None` when the start line has no `{` or the depth never returns
/// to zero after opening.
pub(crate) fn find_balanced_end(lines: &[&str], start: usize) -> Option<usize> {
    if !lines.get(start)?.contains('{') {
        return None;
    }

    let mut depth: i64 = 0;
    let mut opened = false;

    for (idx, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    if depth > 0 {
                        opened = true;
                    }
                }
                '}' => depth -= 1,
                _ => {}
            }
        }

        if opened && depth == 0 && idx > start {
            return Some(idx);
        }
    }

    None
}

/// Lines `start..=end` (1-indexed, clamped to the document) joined by `\n`
pub fn slice_lines(source: &str, start: usize, end: usize) -> String {
    let start = start.max(1);
    if end < start {
        return String::new();
    }
    source
        .split('\n')
        .skip(start - 1)
        .take(end - start + 1)
        .collect::<Vec<_>>()
        .join("\n")
}
