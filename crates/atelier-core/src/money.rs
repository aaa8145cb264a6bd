//! # Money Module
//!
//! Provides the `Money` type for artwork prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    A $120 painting is 12000 cents. Cart totals are exact sums.          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use atelier_core::money::Money;
//!
//! let price = Money::from_major_minor(120, 0); // $120.00
//! let total: Money = [price, Money::from_cents(4550)].into_iter().sum();
//! assert_eq!(total.cents(), 16550);
//! ```
//!
//! Arithmetic saturates at the `i64` bounds instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// The storefront prices everything in a single currency with no tax or
/// discount modeling, so this is a thin wrapper over `i64`.
///
/// ```text
/// Artwork.price ──► CartLineItem.line_total() ──► CartStore::cart_total()
///                                                        │
///                                                        └──► "$165.50"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use atelier_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ```rust
    /// use atelier_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(120, 0).cents(), 12000);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative. Catalog prices never are.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a line quantity.
    ///
    /// ```rust
    /// use atelier_core::money::Money;
    ///
    /// let line_total = Money::from_cents(299).multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Converts an amount in major units (dollars), rounding to the nearest
    /// cent. `None` for NaN, infinities and amounts outside the `i64` cent
    /// range.
    ///
    /// ```rust
    /// use atelier_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_f64(120.0), Some(Money::from_cents(12000)));
    /// assert_eq!(Money::from_major_f64(85.5), Some(Money::from_cents(8550)));
    /// assert_eq!(Money::from_major_f64(f64::NAN), None);
    /// ```
    pub fn from_major_f64(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34`. Locale-aware formatting belongs to the frontend.
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
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Summing an empty iterator yields `Money::zero()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Major-Unit Serde
// =============================================================================

/// Serde adapter that writes `Money` as a JSON number of major units:
/// `12000` cents is `120`, `8550` cents is `85.5`.
///
/// Persisted carts carry artwork prices this way, so use it with
/// `#[serde(with = "atelier_core::money::major_units")]`.
pub mod major_units {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Money;

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        if money.cents_part() == 0 {
            serializer.serialize_i64(money.dollars())
        } else {
            serializer.serialize_f64(money.cents() as f64 / 100.0)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_major_f64(amount)
            .ok_or_else(|| D::Error::custom(format!("price {} is out of range", amount)))
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
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(120, 0).cents(), 12000);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(12000).to_string(), "$120.00");
        assert_eq!(Money::from_cents(505).to_string(), "$5.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_sum_and_multiply() {
        let prices = [Money::from_cents(12000), Money::from_cents(4550)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 16550);
        assert_eq!((Money::from_cents(250) * 4).cents(), 1000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(max.multiply_quantity(2), max);

        let total: Money = [max, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total, max);

        let mut running = max;
        running += Money::from_cents(100);
        assert_eq!(running, max);
    }

    #[test]
    fn test_from_major_f64_bounds() {
        assert_eq!(Money::from_major_f64(0.0), Some(Money::zero()));
        assert_eq!(Money::from_major_f64(-50.0), Some(Money::from_cents(-5000)));
        assert_eq!(Money::from_major_f64(f64::INFINITY), None);
        assert_eq!(Money::from_major_f64(1e30), None);
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "major_units")]
        price: Money,
    }

    #[test]
    fn test_major_units_serde() {
        let whole = serde_json::to_string(&Priced { price: Money::from_cents(12000) }).unwrap();
        assert_eq!(whole, r#"{"price":120}"#);
        let fractional = serde_json::to_string(&Priced { price: Money::from_cents(8550) }).unwrap();
        assert_eq!(fractional, r#"{"price":85.5}"#);

        let back: Priced = serde_json::from_str(r#"{"price":120}"#).unwrap();
        assert_eq!(back.price.cents(), 12000);
        let back: Priced = serde_json::from_str(r#"{"price":19.99}"#).unwrap();
        assert_eq!(back.price.cents(), 1999);

        assert!(serde_json::from_str::<Priced>(r#"{"price":1e300}"#).is_err());
        assert!(serde_json::from_str::<Priced>(r#"{"price":"120"}"#).is_err());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&Money::from_cents(12000)).unwrap();
        assert_eq!(json, "12000");
        let back: Money = serde_json::from_str("4550").unwrap();
        assert_eq!(back.cents(), 4550);
    }
}
