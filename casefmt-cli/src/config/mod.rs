//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Format selection configuration
    #[serde(default)]
    pub format: FormatConfig,

    /// Interactive session configuration
    #[serde(default)]
    pub interactive: InteractiveConfig,
}

/// Format-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct FormatConfig {
    /// Default case for the `format` subcommand when `--case` is omitted
    /// (one of "upper", "lower", "title")
    pub default_case: Option<String>,
}

/// Interactive-session configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct InteractiveConfig {
    /// Whether the session prints its prompts and banner
    pub show_prompts: bool,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self { show_prompts: true }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}
