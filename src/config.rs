//! Runtime configuration loaded from an optional TOML file

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Account registry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Refuse to open an account under an ID that is already taken.
    /// When disabled the older account keeps answering lookups.
    pub reject_duplicate_ids: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            reject_duplicate_ids: true,
        }
    }
}

/// Operator console settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Title printed above the menu
    pub title: String,
    /// Decimal places amounts are rounded to for display
    pub display_scale: i64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            title: "Banking System Menu".to_string(),
            display_scale: 2,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub registry: RegistryConfig,
    pub console: ConsoleConfig,
}

impl BankConfig {
    /// Parse configuration from TOML text; missing keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration from a file if it exists, otherwise use defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
