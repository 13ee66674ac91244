//! # Speller Module
//!
//! Turns an amount into the phrase printed under the total on a document.
//!
//! ## Phrase Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [negative] <whole words> <currency name> [<and> <cents words> <cents>] │
//! │                                                                         │
//! │  1234.56, english, USD                                                  │
//! │    "One thousand two hundred thirty-four US dollars and fifty-six cents"│
//! │                                                                         │
//! │  1234.56, english, IQD   (IQD never spells cents)                       │
//! │    "One thousand two hundred thirty-four Iraqi dinars"                  │
//! │                                                                         │
//! │  3000, arabic, USD                                                      │
//! │    "ثلاثة آلاف دولار أمريكي"                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## User Workflow
//! ```text
//! Invoice saved (total 1234.56, amount_language "english", USD)
//!      │
//!      ▼
//! speak(1234.56, English, Usd) ← THIS MODULE
//!      │
//!      ▼
//! PDF renderer places the phrase under the totals box
//! ```
//!
//! Every function here is pure; calling it twice with the same arguments
//! gives byte-identical strings.

use serde::{Deserialize, Serialize};

use crate::amount::{Amount, Groups};
use crate::error::{SpellError, SpellResult};
use crate::lexicon::{join_nonempty, Lexicon};
use crate::types::{Currency, Language};
use crate::MAX_WHOLE;

// =============================================================================
// Free Functions
// =============================================================================

/// Spells out `amount` in `language`, naming `currency`.
///
/// ## Errors
/// - `NonFiniteAmount` for NaN or infinity
/// - `UnsupportedMagnitude` when the whole part is 10^12 or more
///
/// ## Example
/// ```rust
/// use sanad_core::{speak, Currency, Language};
///
/// let words = speak(1234.56, Language::English, Currency::Usd).unwrap();
/// assert_eq!(
///     words,
///     "One thousand two hundred thirty-four US dollars and fifty-six cents"
/// );
/// ```
pub fn speak(amount: f64, language: Language, currency: Currency) -> SpellResult<String> {
    let amount = Amount::from_f64(amount)?;
    Ok(speak_amount(&amount, language, currency))
}

/// Spells out an already decomposed amount. Never fails.
///
/// Negative amounts get the sign word once, at the front; cents are taken
/// from the absolute value.
pub fn speak_amount(amount: &Amount, language: Language, currency: Currency) -> String {
    let lexicon = language.lexicon();
    let mut phrase = String::new();

    if amount.is_negative() {
        phrase.push_str(lexicon.negative);
        phrase.push(' ');
    }

    phrase.push_str(&whole_words(amount.whole(), lexicon));
    phrase.push(' ');
    phrase.push_str(lexicon.currency_name(currency));

    if currency.has_minor_unit() && amount.cents() > 0 {
        phrase.push_str(lexicon.cents_joiner);
        phrase.push_str(&lexicon.render_tens(amount.cents()));
        phrase.push(' ');
        phrase.push_str(lexicon.cents_word);
    }

    if language.is_cased() {
        capitalize_first(&phrase)
    } else {
        phrase
    }
}

/// Spells out a whole number with no currency, in lower case.
///
/// ## Example
/// ```rust
/// use sanad_core::{number_to_words, Language};
///
/// assert_eq!(number_to_words(2002, Language::Arabic).unwrap(), "ألفان واثنان");
/// assert_eq!(number_to_words(0, Language::English).unwrap(), "zero");
/// ```
pub fn number_to_words(n: u64, language: Language) -> SpellResult<String> {
    if n > MAX_WHOLE {
        return Err(SpellError::UnsupportedMagnitude {
            whole: n,
            max: MAX_WHOLE,
        });
    }
    Ok(whole_words(n, language.lexicon()))
}

// =============================================================================
// AmountSpeller
// =============================================================================

/// The (language, currency) pair a document is rendered with.
///
/// ## Example
/// ```rust
/// use sanad_core::{AmountSpeller, Currency, Language};
///
/// let speller = AmountSpeller::new(Language::Kurdish, Currency::Iqd);
/// assert_eq!(speller.speak(25.0).unwrap(), "بیست و پێنج دیناری عێراقی");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AmountSpeller {
    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub currency: Currency,
}

impl AmountSpeller {
    pub const fn new(language: Language, currency: Currency) -> Self {
        AmountSpeller { language, currency }
    }

    /// See [`speak`].
    pub fn speak(&self, amount: f64) -> SpellResult<String> {
        speak(amount, self.language, self.currency)
    }

    /// Spells out an amount held as integer minor units.
    pub fn speak_cents(&self, cents: i64) -> SpellResult<String> {
        let amount = Amount::from_cents(cents)?;
        Ok(self.speak_amount(&amount))
    }

    /// See [`speak_amount`].
    pub fn speak_amount(&self, amount: &Amount) -> String {
        speak_amount(amount, self.language, self.currency)
    }
}

// =============================================================================
// Internals
// =============================================================================

/// Whole part words: scaled groups in descending order, zero groups skipped.
fn whole_words(whole: u64, lexicon: &Lexicon) -> String {
    if whole == 0 {
        return lexicon.zero.to_string();
    }

    let groups = Groups::of(whole);
    let scaled = groups
        .scaled()
        .into_iter()
        .filter(|(group, _)| *group > 0)
        .map(|(group, scale)| lexicon.render_scaled(group, scale));

    join_nonempty(
        scaled.chain(std::iter::once(lexicon.render_group(groups.remainder))),
        lexicon.group_joiner,
    )
}

fn capitalize_first(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Reads an English phrase produced by `speak` back into its whole part.
    fn parse_english_whole(phrase: &str) -> u64 {
        let mut total = 0u64;
        let mut current = 0u64;

        for word in phrase.to_lowercase().split([' ', '-']) {
            let value = match word {
                "zero" => 0,
                "one" => 1,
                "two" => 2,
                "three" => 3,
                "four" => 4,
                "five" => 5,
                "six" => 6,
                "seven" => 7,
                "eight" => 8,
                "nine" => 9,
                "ten" => 10,
                "eleven" => 11,
                "twelve" => 12,
                "thirteen" => 13,
                "fourteen" => 14,
                "fifteen" => 15,
                "sixteen" => 16,
                "seventeen" => 17,
                "eighteen" => 18,
                "nineteen" => 19,
                "twenty" => 20,
                "thirty" => 30,
                "forty" => 40,
                "fifty" => 50,
                "sixty" => 60,
                "seventy" => 70,
                "eighty" => 80,
                "ninety" => 90,
                "hundred" => {
                    current *= 100;
                    continue;
                }
                "thousand" | "million" | "billion" => {
                    let scale = match word {
                        "thousand" => 1_000,
                        "million" => 1_000_000,
                        _ => 1_000_000_000,
                    };
                    total += current * scale;
                    current = 0;
                    continue;
                }
                "us" | "iraqi" => break,
                other => panic!("unexpected word {other:?} in {phrase:?}"),
            };
            current += value;
        }

        total + current
    }

    #[test]
    fn test_zero_in_every_language() {
        let expected = [
            (Language::English, "Zero US dollars"),
            (Language::Arabic, "صفر دولار أمريكي"),
            (Language::Kurdish, "سفر دۆلاری ئەمریکی"),
        ];
        for (lang, phrase) in expected {
            assert_eq!(speak(0.0, lang, Currency::Usd).unwrap(), phrase);
        }
        assert_eq!(
            speak(0.0, Language::Arabic, Currency::Iqd).unwrap(),
            "صفر دينار عراقي"
        );
    }

    #[test]
    fn test_english_round_trip() {
        let samples = [
            0u64,
            1,
            9,
            10,
            11,
            19,
            20,
            21,
            99,
            100,
            101,
            199,
            200,
            999,
            1000,
            1001,
            999_999,
            1_000_000,
            1_234_567_890,
        ];
        for n in samples {
            let phrase = speak(n as f64, Language::English, Currency::Usd).unwrap();
            assert!(phrase.ends_with("US dollars"), "{phrase}");
            assert_eq!(parse_english_whole(&phrase), n, "{phrase}");
        }
    }

    #[test]
    fn test_english_with_cents() {
        assert_eq!(
            speak(1234.56, Language::English, Currency::Usd).unwrap(),
            "One thousand two hundred thirty-four US dollars and fifty-six cents"
        );
        assert_eq!(
            speak(0.07, Language::English, Currency::Usd).unwrap(),
            "Zero US dollars and seven cents"
        );
    }

    #[test]
    fn test_iqd_never_spells_cents() {
        assert_eq!(
            speak(1234.56, Language::English, Currency::Iqd).unwrap(),
            "One thousand two hundred thirty-four Iraqi dinars"
        );
        assert_eq!(
            speak(10.99, Language::Kurdish, Currency::Iqd).unwrap(),
            "دە دیناری عێراقی"
        );
    }

    #[test]
    fn test_arabic_singular_one() {
        assert_eq!(
            speak(1.0, Language::Arabic, Currency::Usd).unwrap(),
            "واحد دولار أمريكي"
        );
    }

    #[test]
    fn test_arabic_two_hundred_is_irregular() {
        let phrase = speak(200.0, Language::Arabic, Currency::Iqd).unwrap();
        assert_eq!(phrase, "مائتان دينار عراقي");
        assert!(!phrase.contains("اثنان مائة"));
    }

    #[test]
    fn test_arabic_thousands() {
        assert_eq!(
            speak(1000.0, Language::Arabic, Currency::Usd).unwrap(),
            "ألف دولار أمريكي"
        );
        assert_eq!(
            speak(3000.0, Language::Arabic, Currency::Usd).unwrap(),
            "ثلاثة آلاف دولار أمريكي"
        );
        assert_eq!(
            speak(11_250.0, Language::Arabic, Currency::Iqd).unwrap(),
            "أحد عشر ألف ومائتان وخمسون دينار عراقي"
        );
    }

    #[test]
    fn test_arabic_cents_clause() {
        assert_eq!(
            speak(1.5, Language::Arabic, Currency::Usd).unwrap(),
            "واحد دولار أمريكي وخمسون سنت"
        );
    }

    #[test]
    fn test_kurdish_composition() {
        assert_eq!(
            speak(2_100_021.0, Language::Kurdish, Currency::Usd).unwrap(),
            "دوو ملیۆن و سەد هەزار و بیست و یەک دۆلاری ئەمریکی"
        );
        assert_eq!(
            speak(5.25, Language::Kurdish, Currency::Usd).unwrap(),
            "پێنج دۆلاری ئەمریکی و بیست و پێنج سەنت"
        );
    }

    #[test]
    fn test_kurdish_upper_boundary_has_clean_joins() {
        let phrase = speak(999_999_999.0, Language::Kurdish, Currency::Usd).unwrap();
        assert!(phrase.contains("سەد"));
        assert!(phrase.contains("هەزار"));
        assert!(phrase.contains("ملیۆن"));
        assert!(!phrase.contains("ملیار"));
        assert!(!phrase.contains("  "));
        assert!(!phrase.contains("و و"));
        assert_eq!(phrase.trim(), phrase);
    }

    #[test]
    fn test_skips_zero_groups() {
        assert_eq!(
            speak(1_000_000_005.0, Language::English, Currency::Usd).unwrap(),
            "One billion five US dollars"
        );
        assert_eq!(
            speak(2_000_000.0, Language::Arabic, Currency::Usd).unwrap(),
            "اثنان مليون دولار أمريكي"
        );
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(
            speak(-5.0, Language::English, Currency::Usd).unwrap(),
            "Negative five US dollars"
        );
        assert_eq!(
            speak(-5.5, Language::English, Currency::Usd).unwrap(),
            "Negative five US dollars and fifty cents"
        );
        assert_eq!(
            speak(-12.0, Language::Arabic, Currency::Iqd).unwrap(),
            "سالب اثنا عشر دينار عراقي"
        );
        assert_eq!(
            speak(-3.0, Language::Kurdish, Currency::Iqd).unwrap(),
            "نێگەتیڤ سێ دیناری عێراقی"
        );
    }

    #[test]
    fn test_only_english_is_capitalized() {
        let english = speak(7.0, Language::English, Currency::Iqd).unwrap();
        assert!(english.starts_with('S'));
        assert_eq!(&english[1..], "even Iraqi dinars");
    }

    #[test]
    fn test_speak_is_deterministic() {
        for lang in Language::ALL {
            for currency in Currency::ALL {
                let first = speak(987_654.32, lang, currency).unwrap();
                let second = speak(987_654.32, lang, currency).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_no_mixed_language_output() {
        for currency in Currency::ALL {
            for lang in [Language::Arabic, Language::Kurdish] {
                let phrase = speak(4321.12, lang, currency).unwrap();
                assert!(!phrase.chars().any(|c| c.is_ascii_alphabetic()), "{phrase}");
            }
        }
    }

    #[test]
    fn test_out_of_domain_inputs_are_errors() {
        assert!(matches!(
            speak(1e12, Language::English, Currency::Usd),
            Err(SpellError::UnsupportedMagnitude { .. })
        ));
        assert!(matches!(
            speak(f64::NAN, Language::Arabic, Currency::Usd),
            Err(SpellError::NonFiniteAmount)
        ));
        assert!(number_to_words(MAX_WHOLE + 1, Language::Kurdish).is_err());
    }

    #[test]
    fn test_largest_supported_amount() {
        let phrase = speak(999_999_999_999.0, Language::English, Currency::Iqd).unwrap();
        assert!(phrase.starts_with("Nine hundred ninety-nine billion"));
        assert_eq!(parse_english_whole(&phrase), MAX_WHOLE);
    }

    #[test]
    fn test_number_to_words() {
        assert_eq!(number_to_words(21, Language::English).unwrap(), "twenty-one");
        assert_eq!(number_to_words(100, Language::Kurdish).unwrap(), "سەد");
        assert_eq!(number_to_words(2002, Language::Arabic).unwrap(), "ألفان واثنان");
    }

    #[test]
    fn test_amount_speller() {
        let speller = AmountSpeller::new(Language::English, Currency::Usd);
        assert_eq!(
            speller.speak_cents(123_456).unwrap(),
            speller.speak(1234.56).unwrap()
        );
        assert_eq!(
            speller.speak_cents(-199).unwrap(),
            "Negative one US dollars and ninety-nine cents"
        );
        assert_eq!(AmountSpeller::default(), speller);
    }

    #[test]
    fn test_amount_speller_deserializes_with_defaults() {
        let speller: AmountSpeller = serde_json::from_str(r#"{"language":"arabic"}"#).unwrap();
        assert_eq!(speller, AmountSpeller::new(Language::Arabic, Currency::Usd));
    }
}
