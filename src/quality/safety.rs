//! @acp:module "Runtime Safety Checks"
//! @acp:summary "Flags likely undefined-access crashes in generated templates"
//! @acp:domain quality
//! @acp:layer logic

use std::sync::LazyLock;

use regex::Regex;

/// Fields generated content conventionally reads without guards
const GUARDED_FIELDS: &[&str] = &["title", "content"];

const ITERATION_METHODS: &[&str] = &[".map(", ".filter(", ".forEach("];

const EMPTY_COLLECTION_DEFAULTS: &[&str] = &["= []", "|| []", "?? []"];

static ARRAY_BINDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(const|let|var)\s+\w+\s*=\s*\[").unwrap());

/// `{obj.prop}` in markup, which can never contain `?.`
static BARE_PROPERTY_ACCESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\.(\w+)\}").unwrap());

/// @acp:summary "Collect every runtime-safety issue in template code"
/// Each returned entry counts as one independent deduction.
pub fn runtime_safety_issues(code: &str) -> Vec<String> {
    let mut issues = Vec::new();

    for field in GUARDED_FIELDS {
        let accessed = code.contains(&format!(".{}", field));
        let guarded = code.contains(&format!("?.{}", field)) || code.contains(&format!("{} ||", field));
        if accessed && !guarded {
            issues.push(format!(
                "Potential undefined access: .{} without optional chaining",
                field
            ));
        }
    }

    if ITERATION_METHODS.iter().any(|m| code.contains(m)) {
        let has_default = EMPTY_COLLECTION_DEFAULTS.iter().any(|d| code.contains(d))
            || ARRAY_BINDING.is_match(code);
        if !has_default {
            issues.push("Array methods used without default empty array".to_string());
        }
    }

    for access in BARE_PROPERTY_ACCESS.find_iter(code) {
        issues.push(format!(
            "Unsafe property access: {} - should use optional chaining",
            access.as_str()
        ));
    }

    issues
}

/// Whether the code has no runtime-safety issues
pub fn is_runtime_safe(code: &str) -> bool {
    runtime_safety_issues(code).is_empty()
}
