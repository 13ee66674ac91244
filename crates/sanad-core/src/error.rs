//! # Error Types
//!
//! Domain-specific error types for sanad-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sanad-core errors (this file)                                         │
//! │  ├── SpellError       - Conversion domain errors                       │
//! │  └── ValidationError  - Form input validation failures                 │
//! │                                                                         │
//! │  sanad-cli errors (separate crate)                                     │
//! │  └── CliError         - Config file / terminal failures                │
//! │                                                                         │
//! │  Flow: ValidationError → SpellError → CliError → stderr                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The converter is total over its documented domain, so every variant here
//! describes input that falls outside it. None of them are produced by I/O.

use thiserror::Error;

// =============================================================================
// Spell Error
// =============================================================================

/// Errors raised when an amount cannot be spelled out.
#[derive(Debug, Error)]
pub enum SpellError {
    /// Language selector outside {english, arabic, kurdish}.
    #[error("Unsupported language: '{0}'. Valid options: english, arabic, kurdish")]
    InvalidLanguage(String),

    /// Currency selector outside {USD, IQD}.
    #[error("Unsupported currency: '{0}'. Valid options: USD, IQD")]
    InvalidCurrency(String),

    /// Whole part reaches the trillions, which has no scale word.
    ///
    /// ## When This Occurs
    /// - A total of 10^12 or more is passed in
    /// - A corrupted cents value is read back from storage
    #[error("Amount {whole} is too large to spell out (maximum {max})")]
    UnsupportedMagnitude { whole: u64, max: u64 },

    /// NaN or infinity.
    #[error("Amount must be a finite number")]
    NonFiniteAmount,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for raw form values.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g. "12,3a").
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Magnitude exceeds what can be spelled out.
    #[error("{field} must not exceed {max}")]
    OutOfRange { field: String, max: u64 },

    /// NaN or infinity.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with SpellError.
pub type SpellResult<T> = Result<T, SpellError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SpellError::UnsupportedMagnitude {
            whole: 1_000_000_000_000,
            max: 999_999_999_999,
        };
        assert_eq!(
            err.to_string(),
            "Amount 1000000000000 is too large to spell out (maximum 999999999999)"
        );

        let err = SpellError::InvalidCurrency("EUR".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported currency: 'EUR'. Valid options: USD, IQD"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount is required");

        let err = ValidationError::NotFinite {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount must be a finite number");
    }

    #[test]
    fn test_validation_converts_to_spell_error() {
        let validation_err = ValidationError::Required {
            field: "amount_language".to_string(),
        };
        let spell_err: SpellError = validation_err.into();
        assert!(matches!(spell_err, SpellError::Validation(_)));
    }
}
