//! Configuration module for the baskt CLI.
//!
//! This module handles loading configuration and turning it into the
//! keyword table the scanner uses.
//!
//! ```toml
//! [keywords]
//! builtins = ["ABS", "LEN"]
//! aliases = { SAY = "PRINT" }
//!
//! [output]
//! format = "json"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use baskc_lex::{KeywordTable, TokenKind};
use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::commands::common::OutputFormat;
use crate::error::{BasktError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "baskt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Keyword table adjustments.
    #[serde(default)]
    pub keywords: KeywordsConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Keyword table adjustments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeywordsConfig {
    /// Names scanned as builtin functions.
    #[serde(default)]
    pub builtins: Vec<String>,

    /// Extra spellings, mapped to a token kind name such as `"PRINT"`.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default format for `baskt tokens`.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/baskt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BasktError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| BasktError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Build the keyword table: the standard dialect, then builtins, then
    /// aliases.
    ///
    /// # Errors
    ///
    /// [`BasktError::Config`] if an alias names an unknown token kind.
    pub fn build_table(&self) -> Result<KeywordTable> {
        let mut table = KeywordTable::basic();

        for name in &self.keywords.builtins {
            table.register_builtin(name);
        }

        for (word, kind_name) in &self.keywords.aliases {
            let kind = TokenKind::from_name(kind_name).ok_or_else(|| {
                BasktError::Config(format!(
                    "Alias `{}` refers to unknown token kind `{}`",
                    word, kind_name
                ))
            })?;
            table.insert(word, kind);
        }

        tracing::debug!(
            builtins = self.keywords.builtins.len(),
            aliases = self.keywords.aliases.len(),
            "built keyword table"
        );
        Ok(table)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("baskt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("baskt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
