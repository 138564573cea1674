//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::quality::DEFAULT_MIN_SCORE;

/// Default config file name in the project root
pub const CONFIG_FILE: &str = ".carve.config.json";

fn default_config_schema() -> String {
    "https://carve.dev/schemas/v1/config.schema.json".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

/// @acp:summary "Main carve configuration structure"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON Schema URL for validation
    #[serde(rename = "$schema", default = "default_config_schema")]
    pub schema: String,

    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Template file patterns to include (glob syntax)
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Template file patterns to exclude (glob syntax)
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Component extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Template quality gate settings
    #[serde(default)]
    pub quality: QualityConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: default_config_schema(),
            version: default_version(),
            include: default_include(),
            exclude: default_exclude(),
            extraction: ExtractionConfig::default(),
            quality: QualityConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load from default location or create default config"
    pub fn load_or_default() -> Self {
        Self::load(CONFIG_FILE).unwrap_or_default()
    }
}

fn default_include() -> Vec<String> {
    vec![
        "**/*.tsx".to_string(),
        "**/*.jsx".to_string(),
        "**/*.ts".to_string(),
        "**/*.js".to_string(),
    ]
}

fn default_exclude() -> Vec<String> {
    vec![
        // Package managers
        "**/node_modules/**".to_string(),
        // Build outputs
        "**/dist/**".to_string(),
        "**/build/**".to_string(),
        "**/out/**".to_string(),
        // Framework-specific
        "**/.next/**".to_string(),       // Next.js
        "**/.vite/**".to_string(),       // Vite
        "**/.turbo/**".to_string(),      // Turborepo
        // Declarations and tests are never templates
        "**/*.d.ts".to_string(),
        "**/*.test.*".to_string(),
        "**/*.spec.*".to_string(),
        // VCS
        "**/.git/**".to_string(),
    ]
}

/// @acp:summary "Component extraction settings"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionConfig {
    /// Style used when a request names none
    #[serde(default = "default_style")]
    pub default_style: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_style: default_style(),
        }
    }
}

fn default_style() -> String {
    "Minimal Corporate".to_string()
}

/// @acp:summary "Template quality gate settings"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityConfig {
    /// Minimum score a template needs, on top of the responsive and typography gates
    #[serde(default = "default_min_score")]
    pub min_score: u32,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
        }
    }
}

fn default_min_score() -> u32 {
    DEFAULT_MIN_SCORE
}
