//! @acp:module "Extraction Strategies"
//! @acp:summary "Ordered first-success strategies for slicing one component out of a template"
//! @acp:domain extraction
//! @acp:layer logic
//!
//! Strategies are tried in order and the first non-empty result wins:
//!
//! 0. explicit line range (a human selected the lines), taken verbatim
//! 1. declaration line located by name, closed by brace depth
//! 2. usage tag `<Name ...>` followed by a character-level brace balance,
//!    only when no declaration of the name exists
//! 3. declaration through the next unindented `}`
//!
//! When every strategy misses, the whole source is returned so the result is
//! never empty for non-empty input.

use regex::Regex;

use crate::scan::{find_balanced_end, slice_lines};

/// Attempts that locate a component by name
type NamedStrategy = fn(&str, &str) -> Option<String>;

const NAMED_STRATEGIES: &[(&str, NamedStrategy)] = &[
    ("declaration", by_declaration),
    ("usage-tag", by_usage_tag),
    ("declaration-regex", by_declaration_regex),
];

/// @acp:summary "Extract the code for a component from template source"
pub fn extract_code(
    source: &str,
    name: &str,
    start_line: Option<usize>,
    end_line: Option<usize>,
) -> String {
    if let Some(code) = by_explicit_lines(source, start_line, end_line) {
        tracing::debug!("extracted {} from explicit lines", name);
        return code;
    }

    NAMED_STRATEGIES
        .iter()
        .find_map(|(label, strategy)| {
            let code = strategy(source, name)?;
            tracing::debug!("extracted {} with {} strategy", name, label);
            Some(code)
        })
        .unwrap_or_else(|| {
            tracing::debug!("no strategy located {}, using whole source", name);
            source.to_string()
        })
}

fn by_explicit_lines(source: &str, start: Option<usize>, end: Option<usize>) -> Option<String> {
    let (start, end) = (start?, end?);
    // Blank selections are kept; only a range outside the document misses
    let code = slice_lines(source, start, end);
    (!code.is_empty()).then_some(code)
}

fn by_declaration(source: &str, name: &str) -> Option<String> {
    let pattern = declaration_prefix(name)?;
    let found = pattern.find(source)?;
    let start = line_index_at(source, found.start());

    let lines: Vec<&str> = source.split('\n').collect();
    let end = find_balanced_end(&lines, start)?;
    non_empty(slice_lines(source, start + 1, end + 1))
}

fn by_usage_tag(source: &str, name: &str) -> Option<String> {
    // A declared component is sliced from its declaration, never from a usage
    if declaration_prefix(name)?.is_match(source) {
        return None;
    }

    let pattern = named_regex(r"(?i)<{name}[^>]*>", name)?;
    let start = pattern.find(source)?.start();

    let mut depth: i64 = 0;
    let mut opened = false;
    for (offset, ch) in source[start..].char_indices() {
        match ch {
            '{' => {
                depth += 1;
                opened = true;
            }
            '}' => {
                depth -= 1;
                if opened && depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return non_empty(source[start..end].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

fn by_declaration_regex(source: &str, name: &str) -> Option<String> {
    let pattern = named_regex(
        r"(?i)(?:const|function|export\s+(?:const|function))\s+{name}\s*[=:]?\s*[({][\s\S]*?\n\}",
        name,
    )?;
    non_empty(pattern.find(source)?.as_str().to_string())
}

fn declaration_prefix(name: &str) -> Option<Regex> {
    named_regex(
        r"(?i)(?:const|function|export\s+(?:const|function))\s+{name}\s*[=:]?\s*[({]",
        name,
    )
}

/// Build a pattern with the escaped component name substituted for `{name}`
fn named_regex(template: &str, name: &str) -> Option<Regex> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Regex::new(&template.replace("{name}", &regex::escape(name))).ok()
}

fn line_index_at(source: &str, byte_offset: usize) -> usize {
    source[..byte_offset].matches('\n').count()
}

fn non_empty(code: String) -> Option<String> {
    (!code.trim().is_empty()).then_some(code)
}
