//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Cents at Rest, Binary Floats in Flight
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHERE EACH REPRESENTATION LIVES                                        │
//! │                                                                         │
//! │  Catalog prices, breakdowns, records, totals:  Money (i64 cents)        │
//! │                                                                         │
//! │  Inside one pricing stage:  f64 arithmetic, then round_to_cents()       │
//! │    3.40 / 8        = 0.42499999999999998889  →    42 cents              │
//! │    15.30 × 0.075   = 1.14749999999999996447  →   115 cents              │
//! │                                                                         │
//! │  The order log has always been produced with binary floating point,     │
//! │  rounded to the cent after every stage. Reproducing it to the cent      │
//! │  means doing the same multiplications and rounding the EXACT binary     │
//! │  result, ties to even.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rushmore_core::money::{round_to_cents, Money};
//!
//! let price = Money::from_cents(340); // $3.40
//! assert_eq!(price.to_string(), "$3.40");
//!
//! // 2.675 is stored as 2.67499999999999982236431605997495353221893310546875
//! assert_eq!(round_to_cents(2.675), 267);
//! ```

use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;
use std::ops::{Add, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Sums and differences never need a second type
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No Serialize derive**: records store amounts as decimal numbers, see
///   [`amount`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rushmore_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a binary amount in dollars to the nearest cent.
    ///
    /// See [`round_to_cents`] for the exact rounding rule.
    #[inline]
    pub fn from_amount(amount: f64) -> Self {
        Money(round_to_cents(amount))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the amount in dollars as the nearest binary float.
    ///
    /// `Money::from_cents(340).as_amount()` is bit-identical to the literal
    /// `3.4`, because IEEE division of two exact integers is correctly
    /// rounded.
    #[inline]
    pub fn as_amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

// =============================================================================
// Rounding
// =============================================================================

/// Rounds the exact value of `amount` to the nearest hundredth, ties to even,
/// and returns the result in cents.
///
/// The float is decomposed into `mantissa × 2^exponent` and scaled by 100 in
/// 128-bit integer arithmetic, so no intermediate rounding happens. This is
/// the rounding of a correctly rounded decimal conversion: values that merely
/// *print* as a tie (`0.425`, `2.675`) are decided by their true binary value.
///
/// Non-finite input yields 0.
///
/// ## Example
/// ```rust
/// use rushmore_core::money::round_to_cents;
///
/// assert_eq!(round_to_cents(0.625), 62);  // exact tie, rounds to even
/// assert_eq!(round_to_cents(0.375), 38);  // exact tie, rounds to even
/// assert_eq!(round_to_cents(0.425), 42);  // just below the tie
/// assert_eq!(round_to_cents(-1.005), -100);
/// ```
pub fn round_to_cents(amount: f64) -> i64 {
    if !amount.is_finite() {
        return 0;
    }

    let bits = amount.to_bits();
    let negative = bits >> 63 == 1;
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);

    if biased_exponent == 0 && fraction == 0 {
        return 0;
    }

    // amount = mantissa × 2^exponent, exactly
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };

    let scaled = i128::from(mantissa) * 100;

    let magnitude = if exponent >= 0 {
        if exponent > 40 {
            return if negative { i64::MIN } else { i64::MAX };
        }
        scaled << exponent
    } else {
        let shift = exponent.unsigned_abs();
        if shift >= 127 {
            0
        } else {
            let quotient = scaled >> shift;
            let remainder = scaled - (quotient << shift);
            let half = 1i128 << (shift - 1);
            if remainder > half || (remainder == half && quotient & 1 == 1) {
                quotient + 1
            } else {
                quotient
            }
        }
    };

    let cents = i64::try_from(magnitude).unwrap_or(i64::MAX);
    if negative {
        -cents
    } else {
        cents
    }
}

// =============================================================================
// Serde Adapter
// =============================================================================

/// Serializes `Money` as a decimal number (`16.45`) rather than cents.
///
/// ```rust,ignore
/// #[serde(with = "crate::money::amount")]
/// pub total_price: Money,
/// ```
pub mod amount {
    use super::*;

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.as_amount())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_amount(amount))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$12.34`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1645)), "$16.45");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
    }

    #[test]
    fn test_as_amount_matches_literal() {
        assert_eq!(Money::from_cents(340).as_amount(), 3.4);
        assert_eq!(Money::from_cents(42).as_amount(), 0.42);
        assert_eq!(Money::from_cents(1645).as_amount(), 16.45);
    }

    #[test]
    fn test_round_exact_ties_go_to_even() {
        assert_eq!(round_to_cents(0.125), 12);
        assert_eq!(round_to_cents(0.375), 38);
        assert_eq!(round_to_cents(0.625), 62);
        assert_eq!(round_to_cents(0.875), 88);
    }

    #[test]
    fn test_round_uses_binary_value() {
        // Each of these prints like a tie but is stored just below it
        assert_eq!(round_to_cents(0.425), 42);
        assert_eq!(round_to_cents(2.675), 267);
        assert_eq!(round_to_cents(1.005), 100);
        // 17.0 × 0.1 is stored just above 1.7
        assert_eq!(round_to_cents(17.0 * 0.1), 170);
    }

    #[test]
    fn test_round_whole_and_small_values() {
        assert_eq!(round_to_cents(0.0), 0);
        assert_eq!(round_to_cents(-0.0), 0);
        assert_eq!(round_to_cents(60.0), 6000);
        assert_eq!(round_to_cents(0.004), 0);
        assert_eq!(round_to_cents(0.006), 1);
        assert_eq!(round_to_cents(1e-300), 0);
        assert_eq!(round_to_cents(f64::NAN), 0);
    }

    #[test]
    fn test_round_negative_is_symmetric() {
        assert_eq!(round_to_cents(-0.625), -62);
        assert_eq!(round_to_cents(-2.675), -267);
    }

    #[test]
    fn test_amount_serde_adapter() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "amount")]
            price: Money,
        }

        let json = serde_json::to_string(&Wrapper {
            price: Money::from_cents(1645),
        })
        .unwrap();
        assert_eq!(json, r#"{"price":16.45}"#);

        let back: Wrapper = serde_json::from_str(r#"{"price":51.6}"#).unwrap();
        assert_eq!(back.price.cents(), 5160);

        let whole: Wrapper = serde_json::from_str(r#"{"price":60}"#).unwrap();
        assert_eq!(whole.price.cents(), 6000);
    }
}
