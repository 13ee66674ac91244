//! # CLI Error Types
//!
//! Everything that can go wrong between the terminal and sanad-core.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Configuration            Conversion               Output               │
//! │  ─────────────            ──────────               ──────               │
//! │  ConfigLoadFailed         Spell (SpellError)       OutputFailed         │
//! │  ConfigSaveFailed         Validation                                    │
//! │  InvalidConfig                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sanad_core::{SpellError, ValidationError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// A config value is present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Conversion Errors
    // =========================================================================
    /// Amount could not be spelled out.
    #[error(transparent)]
    Spell(#[from] SpellError),

    /// Amount or selector typed on the command line is malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // =========================================================================
    // Output Errors
    // =========================================================================
    /// Failed to write to stdout.
    #[error("Failed to write output: {0}")]
    OutputFailed(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::OutputFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::ConfigSaveFailed(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::OutputFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_errors_pass_through_unchanged() {
        let err: CliError = SpellError::NonFiniteAmount.into();
        assert_eq!(err.to_string(), "Amount must be a finite number");
    }

    #[test]
    fn test_toml_error_is_a_load_failure() {
        let parse_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: CliError = parse_err.into();
        assert!(matches!(err, CliError::ConfigLoadFailed(_)));
    }
}
