//! @acp:module "Classify Command"
//! @acp:summary "Report the component type and reusability of a template or one component in it"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::classify::{classify_type, is_reusable, ComponentType};
use crate::extract::extract_code;

/// Options for the classify command
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// Template file
    pub file: PathBuf,
    /// Component to classify; the whole file when absent
    pub name: Option<String>,
}

/// Name, type and reusability of a classified template or component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub name: String,
    pub component_type: ComponentType,
    pub reusable: bool,
}

/// Classify the component `name` in `source`, or the whole source under
/// `fallback_name` when no name is given
pub fn classify_source(source: &str, name: Option<&str>, fallback_name: &str) -> Classification {
    let (name, code) = match name {
        Some(name) => (name.to_string(), extract_code(source, name, None, None)),
        None => (fallback_name.to_string(), source.to_string()),
    };

    Classification {
        component_type: classify_type(&code, &name),
        reusable: is_reusable(&name, &code),
        name,
    }
}

/// Execute the classify command
pub fn execute_classify(options: ClassifyOptions) -> Result<Classification> {
    let source = std::fs::read_to_string(&options.file)
        .with_context(|| format!("Failed to read {}", options.file.display()))?;

    let stem = options
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let result = classify_source(&source, options.name.as_deref(), &stem);

    println!(
        "{} {}",
        style(&result.name).bold(),
        style(format!("[{}]", result.component_type)).cyan()
    );
    if result.reusable {
        println!("  {} Reusable", style("✓").green());
    } else {
        println!("  {} Not reusable on its own", style("•").dim());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEMPLATE: &str = "const NavBar = () => {\n  return <nav>links</nav>\n}\n\nexport default function App() {\n  return <footer>© 2024</footer>\n}\n";

    #[test]
    fn test_classify_named_component() {
        let result = classify_source(TEMPLATE, Some("NavBar"), "landing");
        assert_eq!(result.name, "NavBar");
        assert_eq!(result.component_type, ComponentType::Nav);
        assert!(result.reusable);
    }

    #[test]
    fn test_classify_whole_file_uses_stem() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("site-footer.tsx");
        std::fs::write(&file, TEMPLATE).unwrap();

        let result = execute_classify(ClassifyOptions { file, name: None }).unwrap();
        assert_eq!(result.name, "site-footer");
        assert_eq!(result.component_type, ComponentType::Footer);
    }

    #[test]
    fn test_classify_missing_file_errors() {
        let options = ClassifyOptions {
            file: PathBuf::from("/nonexistent/template.tsx"),
            name: None,
        };
        assert!(execute_classify(options).is_err());
    }
}
