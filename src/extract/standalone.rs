//! @acp:module "Standalone-ifier"
//! @acp:summary "Guarantees extracted code carries its own imports and export"
//! @acp:domain extraction
//! @acp:layer logic

use std::sync::LazyLock;

use regex::Regex;

/// Imports prepended to code that has none
pub const STANDALONE_IMPORTS: &[&str] = &[
    "import { motion } from 'framer-motion'",
    "import React from 'react'",
];

static CONST_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const\s+(\w+)").unwrap());

static FUNCTION_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+(\w+)").unwrap());

/// @acp:summary "Make extracted component code self-contained"
///
/// Code that already imports something is returned unchanged. Otherwise the
/// fixed imports are prepended and, if nothing is exported, the first
/// `const`/`function` declaration is exported or the whole slice is wrapped
/// in a default-exported function named `name`.
pub fn standaloneify(code: &str, name: &str) -> String {
    if code.contains("import") {
        return code.to_string();
    }

    let body = if code.contains("export") {
        code.to_string()
    } else {
        export_declaration(code, name)
    };

    format!("{}\n\n{}", STANDALONE_IMPORTS.join("\n"), body)
}

fn export_declaration(code: &str, name: &str) -> String {
    if code.contains("const") && code.contains('=') {
        CONST_DECLARATION.replace(code, "export const $1").into_owned()
    } else if code.contains("function") {
        FUNCTION_DECLARATION.replace(code, "export function $1").into_owned()
    } else {
        format!(
            "export default function {}() {{\n  return (\n    {}\n  )\n}}",
            name, code
        )
    }
}
