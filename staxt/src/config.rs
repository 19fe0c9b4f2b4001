//! Configuration module for the staxt CLI.
//!
//! This module handles loading, saving, and locating `staxt.toml`.
//! Every field has a default, so a partial file (or none at all) works.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stax_util::DiagnosticCode;

use crate::error::{Result, StaxtError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "staxt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// How tokens are printed.
    #[serde(default)]
    pub output: OutputConfig,

    /// Whether and which lexer warnings are shown.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,

    /// REPL settings.
    #[serde(default)]
    pub repl: ReplConfig,
}

/// Token output options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format name (`text` or `json`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Append `@line:column` to text output.
    #[serde(default)]
    pub spans: bool,
}

/// Lexer warning options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Print a warning for each dropped fragment.
    #[serde(default)]
    pub enabled: bool,

    /// Codes never printed, e.g. `["W1001"]`.
    #[serde(default)]
    pub allow: Vec<String>,
}

/// REPL options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplConfig {
    /// Prompt printed before each line.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_prompt() -> String {
    "stax> ".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            spans: false,
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

impl DiagnosticsConfig {
    /// Parses the allow-list into diagnostic codes.
    pub fn allowed_codes(&self) -> Result<Vec<DiagnosticCode>> {
        self.allow
            .iter()
            .map(|code| code.parse::<DiagnosticCode>().map_err(StaxtError::from))
            .collect()
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory (`~/.config/staxt/`)
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StaxtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| StaxtError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| StaxtError::Config(format!("Failed to serialize configuration: {}", e)))
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("staxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("staxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
