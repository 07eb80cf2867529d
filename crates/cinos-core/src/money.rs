//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    1.50 + 0.15 + 0.15 = 1.8000000000000003                              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    150 + 15 + 15 = 180 cents, always                                    │
//! │                                                                         │
//! │  Every menu price is a whole number of cents, so item prices and the   │
//! │  subtotal are exact. Tax is the only fractional amount and is rounded  │
//! │  exactly once, in `calculate_tax`.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cinos_core::money::Money;
//!
//! let hotdog = Money::from_cents(230); // $2.30
//! let with_chili = hotdog + Money::from_cents(60);
//! assert_eq!(with_chili.to_string(), "$2.90");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Size/Food/Flavor tables ──► item.price() ──► Order::subtotal()        │
/// │                                                   │                     │
/// │                                    calculate_tax ◄┘                     │
/// │                                          │                              │
/// │                                          ▼                              │
/// │                                   Order::total() ──► "$5.85"            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::money::Money;
    ///
    /// let price = Money::from_cents(175); // Represents $1.75
    /// assert_eq!(price.cents(), 175);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
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

    /// Calculates tax, rounding half up to the nearest cent.
    ///
    /// ## Implementation
    /// We use integer math: `(amount * rate + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use cinos_core::money::Money;
    /// use cinos_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(545); // $5.45
    /// let rate = TaxRate::from_bps(725);     // 7.25%
    ///
    /// // $5.45 × 7.25% = $0.395125 → $0.40
    /// assert_eq!(subtotal.calculate_tax(rate).cents(), 40);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 keeps large orders from overflowing
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money the way receipts print it: `$1.65`.
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

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Multiplication by a count (e.g. flavors on a drink).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

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
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(150);
        let b = Money::from_cents(15);

        assert_eq!((a + b).cents(), 165);
        assert_eq!((b * 3).cents(), 45);
        assert!((b * 0).is_zero());
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(200), Money::from_cents(345)];
        let owned: Money = prices.iter().copied().sum();
        let borrowed: Money = prices.iter().sum();
        assert_eq!(owned.cents(), 545);
        assert_eq!(borrowed, owned);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_calculation_basic() {
        // $10.00 at 10% = $1.00
        let amount = Money::from_cents(1000);
        let tax = amount.calculate_tax(TaxRate::from_bps(1000));
        assert_eq!(tax.cents(), 100);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // $5.45 at 7.25% = $0.395125 → $0.40
        let tax = Money::from_cents(545).calculate_tax(TaxRate::from_bps(725));
        assert_eq!(tax.cents(), 40);

        // $7.50 at 7.25% = $0.54375 → $0.54
        let tax = Money::from_cents(750).calculate_tax(TaxRate::from_bps(725));
        assert_eq!(tax.cents(), 54);

        // $2.00 at 7.25% = $0.145 exactly → $0.15 (half up)
        let tax = Money::from_cents(200).calculate_tax(TaxRate::from_bps(725));
        assert_eq!(tax.cents(), 15);
    }

    #[test]
    fn test_zero_tax() {
        let tax = Money::from_cents(545).calculate_tax(TaxRate::zero());
        assert!(tax.is_zero());
    }
}
