//! # Validation Module
//!
//! Boundary checks for raw form values before they reach the speller.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Invoice / voucher form                                       │
//! │  ├── Language picker limited to english | arabic | kurdish             │
//! │  └── Amount field                                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Selector strings → Language / Currency                            │
//! │  └── Amount text → finite f64 within the spellable range               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: speller (assumes valid enums, rejects magnitude)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sanad_core::validation::{parse_amount, validate_language};
//! use sanad_core::Language;
//!
//! assert_eq!(validate_language("arabic").unwrap(), Language::Arabic);
//! assert_eq!(parse_amount("1,250.75").unwrap(), 1250.75);
//! assert_eq!(parse_amount("١٢٥٠").unwrap(), 1250.0);
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Currency, Language};
use crate::MAX_WHOLE;

// =============================================================================
// Selector Validators
// =============================================================================

/// Validates the `amount_language` value of a record.
///
/// ## Rules
/// - Must not be empty
/// - Must name one of the supported languages (ISO codes accepted)
pub fn validate_language(value: &str) -> ValidationResult<Language> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "amount_language".to_string(),
        });
    }

    value.parse().map_err(|_| ValidationError::NotAllowed {
        field: "amount_language".to_string(),
        allowed: Language::ALL.iter().map(|l| l.to_string()).collect(),
    })
}

/// Validates a currency code.
pub fn validate_currency(value: &str) -> ValidationResult<Currency> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    value.parse().map_err(|_| ValidationError::NotAllowed {
        field: "currency".to_string(),
        allowed: Currency::ALL.iter().map(|c| c.to_string()).collect(),
    })
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a numeric amount.
///
/// ## Rules
/// - Must be finite
/// - Whole part must not exceed [`MAX_WHOLE`]
///
/// Negative amounts are accepted; they are spelled with a sign word.
pub fn validate_amount(amount: f64) -> ValidationResult<f64> {
    if !amount.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "amount".to_string(),
        });
    }

    if amount.abs().trunc() > MAX_WHOLE as f64 {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            max: MAX_WHOLE,
        });
    }

    Ok(amount)
}

/// Parses an amount typed into a form.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - `,` and the Arabic thousands separator `٬` are ignored
/// - Arabic-Indic (`٠`–`٩`) and Extended Arabic-Indic (`۰`–`۹`) digits are
///   accepted, as is the Arabic decimal separator `٫`
/// - The result must pass [`validate_amount`]
pub fn parse_amount(input: &str) -> ValidationResult<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "amount".to_string(),
        });
    }

    let mut normalized = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            ',' | '٬' => {}
            '٫' => normalized.push('.'),
            '٠'..='٩' => normalized.push(shift_digit(c, '٠')),
            '۰'..='۹' => normalized.push(shift_digit(c, '۰')),
            '0'..='9' | '.' | '-' | '+' => normalized.push(c),
            other => {
                return Err(ValidationError::InvalidFormat {
                    field: "amount".to_string(),
                    reason: format!("unexpected character '{}'", other),
                })
            }
        }
    }

    let amount = normalized
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("'{}' is not a number", trimmed),
        })?;

    validate_amount(amount)
}

/// Maps a digit from a contiguous Unicode digit block onto ASCII.
fn shift_digit(c: char, zero: char) -> char {
    let offset = c as u32 - zero as u32;
    char::from_digit(offset, 10).unwrap_or('0')
}

// =============================================================================
// Unit Tests
// =============================================================================
