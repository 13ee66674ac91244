//! # Lexicon Module
//!
//! Per-language word tables and the grammar rules that glue them together.
//!
//! ## Shape of a Lexicon
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Lexicon                                       │
//! │                                                                         │
//! │  static data                     rules (fn pointers)                    │
//! │  ─────────────────────           ───────────────────────────────        │
//! │  zero, negative                  render_group(0..=999)                  │
//! │  group / cents joiners           render_tens(0..=99)   (cents)          │
//! │  cents word                      render_scaled(group, scale)            │
//! │  currency names [USD, IQD]                                              │
//! │                                                                         │
//! │  ENGLISH ─┐                                                             │
//! │  ARABIC  ─┼──► Language::lexicon() (plain match, no dyn dispatch)       │
//! │  KURDISH ─┘                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All tables are `static` and never mutated, so a `&'static Lexicon` can be
//! shared freely across threads.

mod arabic;
mod english;
mod kurdish;

use crate::types::{Currency, Language, Scale};

pub use arabic::ARABIC;
pub use english::ENGLISH;
pub use kurdish::KURDISH;

/// Word tables and grammar rules for one language.
#[derive(Debug)]
pub struct Lexicon {
    /// Language this lexicon renders.
    pub language: Language,

    /// Word for a whole part of zero.
    pub zero: &'static str,

    /// Prefix for negative amounts (a space follows it).
    pub negative: &'static str,

    /// Placed between scaled groups, e.g. "thousand" and "five hundred".
    pub group_joiner: &'static str,

    /// Placed between the currency name and the cents phrase.
    pub cents_joiner: &'static str,

    /// Word following the cents phrase.
    pub cents_word: &'static str,

    /// Currency names indexed by [`Currency`].
    pub(crate) currency_names: [&'static str; 2],

    pub(crate) group: fn(u16) -> String,
    pub(crate) tens: fn(u8) -> String,
    pub(crate) scaled: fn(u16, Scale) -> String,
}

impl Lexicon {
    /// Localized name for `currency`.
    ///
    /// Total over the language × currency product; no pair falls back to
    /// another language.
    pub fn currency_name(&self, currency: Currency) -> &'static str {
        match currency {
            Currency::Usd => self.currency_names[0],
            Currency::Iqd => self.currency_names[1],
        }
    }

    /// Words for a three-digit group (0..=999). Empty for zero.
    #[inline]
    pub fn render_group(&self, n: u16) -> String {
        debug_assert!(n < 1_000);
        (self.group)(n)
    }

    /// Words for 0..=99 with no hundreds. Empty for zero.
    #[inline]
    pub fn render_tens(&self, n: u8) -> String {
        debug_assert!(n < 100);
        (self.tens)(n)
    }

    /// Words for a non-zero group followed by its scale word.
    #[inline]
    pub fn render_scaled(&self, group: u16, scale: Scale) -> String {
        debug_assert!(group > 0 && group < 1_000);
        (self.scaled)(group, scale)
    }
}

impl Language {
    /// Lexicon for this language.
    pub fn lexicon(&self) -> &'static Lexicon {
        match self {
            Language::English => &ENGLISH,
            Language::Arabic => &ARABIC,
            Language::Kurdish => &KURDISH,
        }
    }
}

// =============================================================================
// Shared Composition Helpers
// =============================================================================

/// Digit tables every language provides.
pub(crate) struct Digits {
    /// Index 0 is unused (empty).
    pub ones: [&'static str; 10],
    /// 10 through 19.
    pub teens: [&'static str; 10],
    /// Indexed by tens digit; 0 and 1 are unused.
    pub tens: [&'static str; 10],
}

impl Digits {
    /// Tens-and-ones composition for 0..=99.
    ///
    /// `joiner` goes between the tens word and a non-zero units word.
    pub fn below_hundred(&self, n: u8, joiner: &str) -> String {
        let n = usize::from(n);
        match n {
            0 => String::new(),
            1..=9 => self.ones[n].to_string(),
            10..=19 => self.teens[n - 10].to_string(),
            _ => {
                let (tens, units) = (n / 10, n % 10);
                if units == 0 {
                    self.tens[tens].to_string()
                } else {
                    format!("{}{}{}", self.tens[tens], joiner, self.ones[units])
                }
            }
        }
    }
}

/// Joins the non-empty parts with `joiner`.
pub(crate) fn join_nonempty<I>(parts: I, joiner: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(joiner)
}

// =============================================================================
// Unit Tests
// =============================================================================
