//! # Sanad Configuration
//!
//! Which language and currency amounts are spelled in when the command line
//! does not say.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --language arabic --currency IQD                                   │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SANAD_LANGUAGE=kurdish                                             │
//! │     SANAD_CURRENCY=IQD                                                 │
//! │     SANAD_FORMAT=json                                                  │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/sanad/sanad.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.sanad.sanad/sanad.toml (macOS)   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     english, USD, text output                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # sanad.toml
//! [speller]
//! language = "arabic"   # english | arabic | kurdish
//! currency = "IQD"      # USD | IQD
//!
//! [output]
//! format = "text"       # text | json
//! show_amount = false
//! ```

use sanad_core::AmountSpeller;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

const CONFIG_FILE_NAME: &str = "sanad.toml";

// =============================================================================
// Output Settings
// =============================================================================

/// How each converted amount is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One phrase per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Prefix each phrase with the amount it was produced from.
    #[serde(default)]
    pub show_amount: bool,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SanadConfig {
    /// Default language and currency.
    #[serde(default)]
    pub speller: AmountSpeller,

    #[serde(default)]
    pub output: OutputSettings,
}

impl SanadConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (sanad.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::read_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            let mut config = Self::default();
            config.apply_env_overrides();
            config
        })
    }

    /// Saves configuration to file, returning the path written.
    pub fn save(&self, config_path: Option<PathBuf>) -> CliResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| CliError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CliError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| CliError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Config saved");
        Ok(path)
    }

    fn read_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CliError::ConfigLoadFailed(format!("{}: {}", path.display(), e)))?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `SANAD_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(lang) = lookup("SANAD_LANGUAGE") {
            match lang.parse() {
                Ok(parsed) => {
                    debug!(language = %lang, "Overriding language from environment");
                    self.speller.language = parsed;
                }
                Err(e) => warn!(language = %lang, error = %e, "Ignoring SANAD_LANGUAGE"),
            }
        }

        if let Some(currency) = lookup("SANAD_CURRENCY") {
            match currency.parse() {
                Ok(parsed) => {
                    debug!(currency = %currency, "Overriding currency from environment");
                    self.speller.currency = parsed;
                }
                Err(e) => warn!(currency = %currency, error = %e, "Ignoring SANAD_CURRENCY"),
            }
        }

        if let Some(format) = lookup("SANAD_FORMAT") {
            match format.parse() {
                Ok(parsed) => self.output.format = parsed,
                Err(e) => warn!(format = %format, error = %e, "Ignoring SANAD_FORMAT"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sanad", "sanad")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
