//! # Domain Types
//!
//! The closed selectors a conversion is parameterized by.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Language     │   │    Currency     │   │     Scale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  English        │   │  Usd (cents)    │   │  Thousand       │       │
//! │  │  Arabic         │   │  Iqd (no minor) │   │  Million        │       │
//! │  │  Kurdish        │   │                 │   │  Billion        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Language is persisted per record as `amount_language`.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::SpellError;

// =============================================================================
// Language
// =============================================================================

/// The natural language an amount is spelled out in.
///
/// Serialized in lowercase (`"english"`, `"arabic"`, `"kurdish"`), which is
/// the value the invoice form stores in its `amount_language` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, first letter capitalized.
    #[default]
    English,
    /// Arabic, with dual/plural forms for hundred and thousand.
    Arabic,
    /// Central Kurdish (Sorani), Arabic script.
    Kurdish,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 3] = [Language::English, Language::Arabic, Language::Kurdish];

    /// Canonical lowercase name, as persisted.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Arabic => "arabic",
            Language::Kurdish => "kurdish",
        }
    }

    /// Whether output in this language has a letter case to adjust.
    #[inline]
    pub const fn is_cased(&self) -> bool {
        matches!(self, Language::English)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "arabic" | "ar" => Ok(Language::Arabic),
            "kurdish" | "ku" | "ckb" => Ok(Language::Kurdish),
            other => Err(SpellError::InvalidLanguage(other.to_string())),
        }
    }
}

// =============================================================================
// Currency
// =============================================================================

/// The currency named after the whole-amount phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollar. Cents are spelled out.
    #[default]
    Usd,
    /// Iraqi dinar. Fractions are never spelled out.
    Iqd,
}

impl Currency {
    /// Every supported currency.
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Iqd];

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Iqd => "IQD",
        }
    }

    /// Whether a "... and N cents" clause is appended for this currency.
    ///
    /// ## Note
    /// IQD returns `false`: invoices in dinars never mention fils, whatever
    /// the fractional value. This mirrors how the documents have always been
    /// printed and is pending confirmation from the product owners.
    #[inline]
    pub const fn has_minor_unit(&self) -> bool {
        matches!(self, Currency::Usd)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "IQD" => Ok(Currency::Iqd),
            other => Err(SpellError::InvalidCurrency(other.to_string())),
        }
    }
}

// =============================================================================
// Scale
// =============================================================================

/// A power-of-one-thousand group position above the units group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Thousand,
    Million,
    Billion,
}

impl Scale {
    /// Scales from largest to smallest, the order groups are spoken in.
    pub const DESCENDING: [Scale; 3] = [Scale::Billion, Scale::Million, Scale::Thousand];

    /// Numeric value of one unit at this scale.
    pub const fn value(&self) -> u64 {
        match self {
            Scale::Thousand => 1_000,
            Scale::Million => 1_000_000,
            Scale::Billion => 1_000_000_000,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("Arabic".parse::<Language>().unwrap(), Language::Arabic);
        assert_eq!("ckb".parse::<Language>().unwrap(), Language::Kurdish);
        assert_eq!(" ku ".parse::<Language>().unwrap(), Language::Kurdish);
        assert!(matches!(
            "french".parse::<Language>(),
            Err(SpellError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn test_currency_parsing() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("IQD".parse::<Currency>().unwrap(), Currency::Iqd);
        assert!(matches!(
            "EUR".parse::<Currency>(),
            Err(SpellError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_serde_names_match_persisted_values() {
        assert_eq!(serde_json::to_string(&Language::Kurdish).unwrap(), "\"kurdish\"");
        assert_eq!(serde_json::to_string(&Currency::Iqd).unwrap(), "\"IQD\"");

        let lang: Language = serde_json::from_str("\"arabic\"").unwrap();
        assert_eq!(lang, Language::Arabic);
        let currency: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(currency, Currency::Usd);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
        for currency in Currency::ALL {
            assert_eq!(currency.to_string().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn test_minor_unit_only_for_usd() {
        assert!(Currency::Usd.has_minor_unit());
        assert!(!Currency::Iqd.has_minor_unit());
    }

    #[test]
    fn test_scale_values_descend() {
        let values: Vec<u64> = Scale::DESCENDING.iter().map(Scale::value).collect();
        assert_eq!(values, vec![1_000_000_000, 1_000_000, 1_000]);
    }
}
