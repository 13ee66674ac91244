//! # Amount Module
//!
//! Decomposes a monetary value into the parts that get spelled out.
//!
//! ## Decomposition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1,234,567,890.56                                                       │
//! │                                                                         │
//! │  whole  = 1234567890        cents = 56                                  │
//! │     │                                                                   │
//! │     ├── billions  = W div 1e9            →   1                          │
//! │     ├── millions  = (W mod 1e9) div 1e6  → 234                          │
//! │     ├── thousands = (W mod 1e6) div 1e3  → 567                          │
//! │     └── remainder = W mod 1e3            → 890                          │
//! │                                                                         │
//! │  Each group is 0..=999 and is rendered by the language's lexicon.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sanad_core::amount::Amount;
//!
//! let amount = Amount::from_f64(1234.56).unwrap();
//! assert_eq!(amount.whole(), 1234);
//! assert_eq!(amount.cents(), 56);
//!
//! // Integer cents, as stored alongside an invoice
//! let stored = Amount::from_cents(123456).unwrap();
//! assert_eq!(stored, amount);
//! ```

use crate::error::{SpellError, SpellResult};
use crate::types::Scale;
use crate::MAX_WHOLE;

// =============================================================================
// Amount
// =============================================================================

/// A validated amount: sign, whole part and cents (0..=99).
///
/// ## Invariants
/// - `whole <= MAX_WHOLE`
/// - `cents <= 99`
/// - zero is never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Amount {
    negative: bool,
    whole: u64,
    cents: u8,
}

impl Amount {
    /// Builds an amount from its parts.
    ///
    /// ## Errors
    /// `UnsupportedMagnitude` when `whole` exceeds [`MAX_WHOLE`].
    /// Cents above 99 are carried into the whole part.
    pub fn new(negative: bool, whole: u64, cents: u32) -> SpellResult<Self> {
        let whole = whole
            .checked_add(u64::from(cents / 100))
            .ok_or(SpellError::UnsupportedMagnitude {
                whole: u64::MAX,
                max: MAX_WHOLE,
            })?;
        if whole > MAX_WHOLE {
            return Err(SpellError::UnsupportedMagnitude {
                whole,
                max: MAX_WHOLE,
            });
        }
        let cents = (cents % 100) as u8;
        Ok(Amount {
            negative: negative && (whole > 0 || cents > 0),
            whole,
            cents,
        })
    }

    /// Decomposes a floating-point amount.
    ///
    /// Whole part is truncated toward zero; cents are
    /// `round((|x| - floor(|x|)) * 100)`, so precision past the second
    /// decimal is discarded. A fraction that rounds up to 100 cents carries
    /// into the whole part.
    ///
    /// ## Example
    /// ```rust
    /// use sanad_core::amount::Amount;
    ///
    /// let a = Amount::from_f64(12.999).unwrap();
    /// assert_eq!((a.whole(), a.cents()), (13, 0));
    ///
    /// let b = Amount::from_f64(-7.5).unwrap();
    /// assert!(b.is_negative());
    /// assert_eq!((b.whole(), b.cents()), (7, 50));
    /// ```
    pub fn from_f64(value: f64) -> SpellResult<Self> {
        if !value.is_finite() {
            return Err(SpellError::NonFiniteAmount);
        }

        let magnitude = value.abs();
        let floor = magnitude.trunc();
        if floor > MAX_WHOLE as f64 {
            return Err(SpellError::UnsupportedMagnitude {
                // Saturating cast; only used for the message
                whole: floor as u64,
                max: MAX_WHOLE,
            });
        }

        let cents = ((magnitude - floor) * 100.0).round() as u32;
        Amount::new(value < 0.0, floor as u64, cents)
    }

    /// Builds an amount from integer minor units.
    ///
    /// ## Example
    /// ```rust
    /// use sanad_core::amount::Amount;
    ///
    /// let a = Amount::from_cents(-550).unwrap();
    /// assert!(a.is_negative());
    /// assert_eq!((a.whole(), a.cents()), (5, 50));
    /// ```
    pub fn from_cents(cents: i64) -> SpellResult<Self> {
        let magnitude = cents.unsigned_abs();
        Amount::new(cents < 0, magnitude / 100, (magnitude % 100) as u32)
    }

    /// Zero.
    #[inline]
    pub const fn zero() -> Self {
        Amount {
            negative: false,
            whole: 0,
            cents: 0,
        }
    }

    /// Integer part, without sign.
    #[inline]
    pub const fn whole(&self) -> u64 {
        self.whole
    }

    /// Fractional part in hundredths (0..=99).
    #[inline]
    pub const fn cents(&self) -> u8 {
        self.cents
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// True when the whole part is zero, regardless of cents.
    #[inline]
    pub const fn is_whole_zero(&self) -> bool {
        self.whole == 0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.whole == 0 && self.cents == 0
    }

    /// The same amount without its sign.
    #[inline]
    pub const fn abs(&self) -> Self {
        Amount {
            negative: false,
            whole: self.whole,
            cents: self.cents,
        }
    }

    /// Splits the whole part into its three-digit groups.
    #[inline]
    pub const fn groups(&self) -> Groups {
        Groups::of(self.whole)
    }
}

// =============================================================================
// Groups
// =============================================================================

/// Three-digit groups of a whole part, most significant first.
///
/// Each field is in 0..=999 except `billions`, which may reach 999 only
/// because the whole part is capped below 10^12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Groups {
    pub billions: u16,
    pub millions: u16,
    pub thousands: u16,
    pub remainder: u16,
}

impl Groups {
    /// Decomposes `whole` (expected to be at most [`MAX_WHOLE`]).
    pub const fn of(whole: u64) -> Self {
        Groups {
            billions: ((whole / 1_000_000_000) % 1_000) as u16,
            millions: ((whole % 1_000_000_000) / 1_000_000) as u16,
            thousands: ((whole % 1_000_000) / 1_000) as u16,
            remainder: (whole % 1_000) as u16,
        }
    }

    /// Scaled groups in speaking order, zero groups included.
    pub const fn scaled(&self) -> [(u16, Scale); 3] {
        [
            (self.billions, Scale::Billion),
            (self.millions, Scale::Million),
            (self.thousands, Scale::Thousand),
        ]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_splits_whole_and_cents() {
        let a = Amount::from_f64(1234.56).unwrap();
        assert_eq!(a.whole(), 1234);
        assert_eq!(a.cents(), 56);
        assert!(!a.is_negative());
    }

    #[test]
    fn test_from_f64_discards_extra_precision() {
        assert_eq!(Amount::from_f64(3.14159).unwrap().cents(), 14);
        assert_eq!(Amount::from_f64(3.145).unwrap().whole(), 3);
        assert_eq!(Amount::from_f64(0.004).unwrap(), Amount::zero());
    }

    #[test]
    fn test_from_f64_carries_rounded_cents() {
        let a = Amount::from_f64(0.999).unwrap();
        assert_eq!((a.whole(), a.cents()), (1, 0));

        let b = Amount::from_f64(99.995).unwrap();
        assert_eq!((b.whole(), b.cents()), (100, 0));
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(matches!(
            Amount::from_f64(f64::NAN),
            Err(SpellError::NonFiniteAmount)
        ));
        assert!(matches!(
            Amount::from_f64(f64::NEG_INFINITY),
            Err(SpellError::NonFiniteAmount)
        ));
    }

    #[test]
    fn test_magnitude_limit() {
        assert!(Amount::from_f64(999_999_999_999.0).is_ok());
        assert!(matches!(
            Amount::from_f64(1_000_000_000_000.0),
            Err(SpellError::UnsupportedMagnitude { .. })
        ));
        assert!(matches!(
            Amount::from_f64(-5e15),
            Err(SpellError::UnsupportedMagnitude { .. })
        ));
        assert!(Amount::from_cents(i64::MIN).is_err());
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        assert!(!Amount::from_f64(-0.0).unwrap().is_negative());
        assert!(!Amount::from_f64(-0.001).unwrap().is_negative());
        assert!(!Amount::from_cents(0).unwrap().is_negative());
    }

    #[test]
    fn test_from_cents_matches_from_f64() {
        assert_eq!(
            Amount::from_cents(100_050).unwrap(),
            Amount::from_f64(1000.5).unwrap()
        );
        let refund = Amount::from_cents(-550).unwrap();
        assert!(refund.is_negative());
        assert!(!refund.abs().is_negative());
    }

    #[test]
    fn test_groups_decomposition() {
        let groups = Groups::of(1_234_567_890);
        assert_eq!(
            groups,
            Groups {
                billions: 1,
                millions: 234,
                thousands: 567,
                remainder: 890,
            }
        );

        let groups = Groups::of(999_999_999);
        assert_eq!(groups.billions, 0);
        assert_eq!(groups.millions, 999);
        assert_eq!(groups.thousands, 999);
        assert_eq!(groups.remainder, 999);
    }

    #[test]
    fn test_groups_scaled_order() {
        let scaled = Groups::of(2_003_004_005).scaled();
        assert_eq!(scaled[0], (2, Scale::Billion));
        assert_eq!(scaled[1], (3, Scale::Million));
        assert_eq!(scaled[2], (4, Scale::Thousand));
    }
}
