//! # Money Module
//!
//! Provides the `Money` type for monetary values and `CurrencyFormat` for
//! rendering them.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart total summed in floats can render as $0.30 or $0.31            │
//! │  depending on the order the lines were added.                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 cents + 20 cents = 30 cents, always                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::money::{CurrencyFormat, Money};
//!
//! let price = Money::from_cents(1099);    // $10.99
//! let line = price.multiply_quantity(3);  // $32.97
//! assert_eq!(CurrencyFormat::default().format(line), "$32.97");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Nothing in the cart rejects negative prices, so the
///   type must carry them
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Dollars on the wire**: serialized as a JSON number in major units
///   (`9.99`), held as cents everywhere else
///
/// ## Where Money Flows
/// ```text
/// ActionPayload.price ──► LineItem.price ──► LineItem::line_total()
///                                                   │
///                                                   ▼
///                          CartState::total_price() (summed numerically)
///                                                   │
///                                                   ▼
///                          CurrencyFormat::format() ──► "$25.00"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (the smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Creates a Money value from a dollar amount, rounded to the nearest cent.
    ///
    /// Only the wire boundary uses this: prices arrive as JSON numbers in
    /// dollars. Out-of-range amounts saturate at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(9.99).cents(), 999);
    /// assert_eq!(Money::from_dollars(10.0).cents(), 1000);
    /// assert_eq!(Money::from_dollars(0.125).cents(), 13);
    /// ```
    pub fn from_dollars(dollars: f64) -> Self {
        Money((dollars * 100.0).round() as i64)
    }

    /// Returns the value as a dollar amount, for the wire form.
    pub fn to_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Currency Format
// =============================================================================

/// How a `Money` value is rendered for display.
///
/// The default is the en-US dollar convention: `$1,234.50`, `-$5.50`,
/// `$0.00`. Formatting is applied once to a finished total, never per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// ISO 4217 code, carried for display layers that show it.
    pub code: String,

    /// Symbol placed before the amount.
    pub symbol: String,

    /// Separator between groups of three major digits (`None` disables grouping).
    pub thousands_separator: Option<char>,

    /// Separator between major and minor units.
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat::usd()
    }
}

impl CurrencyFormat {
    /// US dollars, en-US conventions.
    pub fn usd() -> Self {
        CurrencyFormat {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            thousands_separator: Some(','),
            decimal_separator: '.',
        }
    }

    /// Renders `amount` with two minor digits.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::{CurrencyFormat, Money};
    ///
    /// let usd = CurrencyFormat::usd();
    /// assert_eq!(usd.format(Money::from_cents(123450)), "$1,234.50");
    /// assert_eq!(usd.format(Money::from_cents(-550)), "-$5.50");
    /// assert_eq!(usd.format(Money::zero()), "$0.00");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let abs = amount.cents().unsigned_abs();
        let major = self.group_digits(abs / 100);

        format!(
            "{}{}{}{}{:02}",
            sign,
            self.symbol,
            major,
            self.decimal_separator,
            abs % 100
        )
    }

    fn group_digits(&self, major: u64) -> String {
        let digits = major.to_string();
        let Some(sep) = self.thousands_separator else {
            return digits;
        };

        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(sep);
            }
            out.push(c);
        }
        out
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the en-US dollar format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CurrencyFormat::usd().format(*self))
    }
}

/// Addition saturates; an oversized cart total pins at the bound instead of
/// wrapping.
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
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Wire Form
// =============================================================================

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_dollars())
    }
}

/// Accepts any JSON number (`10`, `9.99`) as dollars.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Money::from_dollars)
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
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_from_dollars_rounds_to_cent() {
        assert_eq!(Money::from_dollars(9.99).cents(), 999);
        assert_eq!(Money::from_dollars(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_dollars(-5.5).cents(), -550);
        assert_eq!(Money::from_dollars(1e30).cents(), i64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(2500)), "$25.00");
    }

    #[test]
    fn test_grouping() {
        let usd = CurrencyFormat::usd();
        assert_eq!(usd.format(Money::from_cents(99_999)), "$999.99");
        assert_eq!(usd.format(Money::from_cents(100_000)), "$1,000.00");
        assert_eq!(usd.format(Money::from_cents(123_456_789)), "$1,234,567.89");
        assert_eq!(usd.format(Money::from_cents(-100_000_00)), "-$100,000.00");
    }

    #[test]
    fn test_custom_format() {
        let eur = CurrencyFormat {
            code: "EUR".to_string(),
            symbol: "€".to_string(),
            thousands_separator: Some('.'),
            decimal_separator: ',',
        };
        assert_eq!(eur.format(Money::from_cents(123_450)), "€1.234,50");

        let plain = CurrencyFormat {
            thousands_separator: None,
            ..CurrencyFormat::usd()
        };
        assert_eq!(plain.format(Money::from_cents(123_450)), "$1234.50");
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let usd = CurrencyFormat::usd();
        assert!(usd.format(Money::from_cents(i64::MIN)).starts_with("-$"));
        assert!(usd.format(Money::from_cents(i64::MAX)).starts_with('$'));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!(a.multiply_quantity(3).cents(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!(big.multiply_quantity(2).cents(), i64::MAX);
        assert_eq!((big + big).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN).multiply_quantity(2).cents(), i64::MIN);

        let total: Money = [big, big, Money::from_cents(100)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Money = [1000, 1000, 500].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 2500);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_wire_form_is_dollars() {
        assert_eq!(serde_json::to_string(&Money::from_cents(1099)).unwrap(), "10.99");
        assert_eq!(serde_json::to_string(&Money::from_cents(1000)).unwrap(), "10.0");

        let whole: Money = serde_json::from_str("10").unwrap();
        assert_eq!(whole.cents(), 1000);
        let fractional: Money = serde_json::from_str("9.99").unwrap();
        assert_eq!(fractional.cents(), 999);
    }
}
