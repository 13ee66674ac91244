//! # sanad-core: Amounts in Words for Sanad
//!
//! Invoices, payment vouchers and receipt vouchers print their total twice:
//! once as digits and once in words. This crate produces the words.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sanad Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Forms (customer / invoice / voucher)                     │   │
//! │  │    amount_language picker ──► record persisted                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sanad-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  amount   │  │  lexicon  │  │  speller  │  │   │
//! │  │   │ Language  │  │  Amount   │  │  English  │  │  speak()  │  │   │
//! │  │   │ Currency  │  │  Groups   │  │  Arabic   │  │           │  │   │
//! │  │   │           │  │           │  │  Kurdish  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        Document renderer (PDF) / sanad-cli                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Language, Currency, Scale selectors
//! - [`amount`] - Sign / whole / cents decomposition
//! - [`lexicon`] - Word tables and grammar rules per language
//! - [`speller`] - Phrase assembly
//! - [`validation`] - Form input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use sanad_core::{speak, Currency, Language};
//!
//! let words = speak(200.0, Language::Arabic, Currency::Iqd).unwrap();
//! assert_eq!(words, "مائتان دينار عراقي");
//!
//! let words = speak(1234.56, Language::English, Currency::Iqd).unwrap();
//! assert_eq!(words, "One thousand two hundred thirty-four Iraqi dinars");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod error;
pub mod lexicon;
pub mod speller;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::Amount;
pub use error::{SpellError, SpellResult, ValidationError};
pub use lexicon::Lexicon;
pub use speller::{number_to_words, speak, speak_amount, AmountSpeller};
pub use types::{Currency, Language, Scale};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest whole part that can be spelled out.
///
/// Billion is the largest scale word in every lexicon, so the whole part
/// must stay below one trillion.
pub const MAX_WHOLE: u64 = 999_999_999_999;
