//! # Money Value Object
//!
//! Decimal-backed monetary amount with display rounding and currency
//! conversion.
//!
//! All displayed prices are rounded to two decimal places with half-up
//! (midpoint away from zero) rounding at the cent. Conversion multiplies
//! by an exchange-rate multiplier and rounds each figure independently.
//!
//! # Examples
//!
//! ```
//! use parcel_rates::domain::value_objects::money::Money;
//! use rust_decimal::Decimal;
//!
//! let base = Money::new(Decimal::new(50, 2)); // 0.50
//! let converted = base.convert(Decimal::new(75, 2)); // * 0.75
//! assert_eq!(converted.amount(), Decimal::new(38, 2)); // 0.375 rounds up
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A monetary amount.
///
/// Wraps `rust_decimal::Decimal`; arithmetic that feeds a displayed price
/// goes through [`Money::rounded`] or [`Money::convert`] so every figure
/// lands on exactly two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a monetary amount from a decimal value.
    #[inline]
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The zero amount.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal value.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Rounds to two decimal places, half-up at the cent.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Multiplies by an exchange-rate multiplier and rounds the result.
    ///
    /// Each converted figure is rounded independently, so a breakdown of
    /// converted components need not sum exactly to a separately converted
    /// total.
    #[must_use]
    pub fn convert(self, rate: Decimal) -> Self {
        Self(self.0 * rate).rounded()
    }

    /// Returns true if the amount is negative.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}
