//! Money type for representing prices.
//!
//! Uses a cents-based integer representation. Catalog prices are authored as
//! decimals and converted once; every cart aggregate after that is exact, so
//! formatting a subtotal twice never compounds rounding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Display symbol for the storefront's single currency.
pub const CURRENCY_SYMBOL: &str = "$";

/// Number of decimal places shown and stored.
pub const DECIMAL_PLACES: u32 = 2;

/// A monetary amount in the storefront currency.
///
/// Amounts are stored in cents. Ordering compares amounts, which is what the
/// catalog view sorts on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use storefront_core::money::Money;
    /// let price = Money::from_decimal(249.9);
    /// assert_eq!(price.amount_cents, 24990);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        let multiplier = 10_i64.pow(DECIMAL_PLACES);
        Self::new((amount * multiplier as f64).round() as i64)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(DECIMAL_PLACES);
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "$249.90").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format without the symbol (e.g., "249.90").
    ///
    /// Formats from the integer cents so the output never depends on float
    /// rounding.
    pub fn display_amount(&self) -> String {
        let divisor = 10_i64.pow(DECIMAL_PLACES);
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!(
            "{}{}.{:0width$}",
            sign,
            abs / divisor as u64,
            abs % divisor as u64,
            width = DECIMAL_PLACES as usize
        )
    }

    /// Add another amount, clamping at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }

    /// Multiply by a quantity, clamping at the numeric bounds.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money::new(self.amount_cents.saturating_mul(i64::from(quantity)))
    }

    /// Calculate what percentage `self` is off `reference`.
    pub fn percent_off(&self, reference: Money) -> Option<f64> {
        if reference.amount_cents <= self.amount_cents || reference.amount_cents <= 0 {
            return None;
        }
        let savings = reference.amount_cents - self.amount_cents;
        Some((savings as f64 / reference.amount_cents as f64) * 100.0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.saturating_mul(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
