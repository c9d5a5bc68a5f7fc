//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    $29.95 is 2995 cents, multipliers are basis points,             │
//! │    rounding is explicit half-up at each multiplier application     │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use folio_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(2995); // $29.95
//!
//! // Arithmetic operations
//! let doubled = price * 2;                     // $59.90
//! let total = price + Money::from_cents(500);  // $34.95
//!
//! // NEVER do this:
//! // let bad = Money::from_float(29.95); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for differences and discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Every monetary value in the system flows through this type: catalog base
/// prices, snapshotted cart line prices, subtotals, converted display
/// amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let price = Money::from_cents(2995); // Represents $29.95
    /// assert_eq!(price.cents(), 2995);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let price = Money::from_major_minor(29, 95); // $29.95
    /// assert_eq!(price.cents(), 2995);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a basis-point multiplier with half-up rounding.
    ///
    /// Format multipliers and currency conversion rates are both expressed
    /// in basis points (1 bps = 1/10000), so a single multiplication
    /// covers "hardcover costs 1.5x" (15000 bps) and "1 USD = 0.92 EUR"
    /// (9200 bps).
    ///
    /// ## Implementation
    /// Integer math with i128 widening: `(cents * bps + 5000) / 10000`.
    /// The +5000 rounds the half case up, matching the storefront's
    /// two-decimal display convention.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let base = Money::from_cents(2995);       // $29.95
    /// let hardcover = base.apply_bps(15_000);   // ×1.5
    /// assert_eq!(hardcover.cents(), 4493);      // $44.925 → $44.93
    /// ```
    pub fn apply_bps(&self, bps: u32) -> Money {
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `percent` - Discount percentage, 0-100
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let list = Money::from_cents(10_000);            // $100.00
    /// let sale = list.apply_percent_discount(10);      // 10% off
    /// assert_eq!(sale.cents(), 9_000);                 // $90.00
    /// ```
    pub fn apply_percent_discount(&self, percent: u8) -> Money {
        let discount = (self.0 as i128 * percent as i128 + 50) / 100;
        Money::from_cents(self.0 - discount as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use folio_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2995);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 8985); // $89.85
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is the base-currency debug rendering. Currency-aware display
/// (symbol + converted amount) lives in the store layer's CurrencyContext.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
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
        let money = Money::from_cents(2995);
        assert_eq!(money.cents(), 2995);
        assert_eq!(money.major(), 29);
        assert_eq!(money.minor(), 95);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(29, 95);
        assert_eq!(money.cents(), 2995);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(2995)), "$29.95");
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
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_apply_bps_identity() {
        // 10000 bps = ×1.0, must be exact
        let amount = Money::from_cents(2995);
        assert_eq!(amount.apply_bps(10_000).cents(), 2995);
    }

    #[test]
    fn test_apply_bps_rounds_half_up() {
        // $29.95 × 1.5 = $44.925 → $44.93
        let amount = Money::from_cents(2995);
        assert_eq!(amount.apply_bps(15_000).cents(), 4493);

        // $0.01 × 0.5 = $0.005 → $0.01 (half rounds up, not to even)
        let penny = Money::from_cents(1);
        assert_eq!(penny.apply_bps(5_000).cents(), 1);
    }

    #[test]
    fn test_apply_bps_truncates_below_half() {
        // $29.95 × 0.92 = $27.554 → $27.55
        let amount = Money::from_cents(2995);
        assert_eq!(amount.apply_bps(9_200).cents(), 2755);
    }

    #[test]
    fn test_percent_discount() {
        let list = Money::from_cents(10_000);
        assert_eq!(list.apply_percent_discount(10).cents(), 9_000);
        assert_eq!(list.apply_percent_discount(0).cents(), 10_000);
        assert_eq!(list.apply_percent_discount(100).cents(), 0);

        // $29.95 at 15% off: discount $4.4925 → $4.49, sale $25.46
        let odd = Money::from_cents(2995);
        assert_eq!(odd.apply_percent_discount(15).cents(), 2546);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(2995);
        let line_total = unit_price.multiply_quantity(2);
        assert_eq!(line_total.cents(), 5990);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }
}
