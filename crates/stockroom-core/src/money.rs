//! # Money Module
//!
//! Provides the `Money` type for handling product prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A price typed as "2.30" stored as a float comes back as               │
//! │    2.2999999999999998                                                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    "2.30" → 230 cents, stored as INTEGER, rendered as "2.30"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price = Money::from_cents(250);
//! assert_eq!(price.to_string(), "2.50");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary value in the smallest currency unit (two decimal places).
///
/// ## Design Decisions
/// - **i64 (signed)**: Matches SQLite INTEGER; negative values are rejected
///   by validation, not by the type
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount, rounding to cents
    /// (half away from zero).
    ///
    /// Returns `None` if the result does not fit in an i64.
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_decimal(Decimal::new(10_995, 3)).unwrap();
    /// assert_eq!(price.cents(), 1100);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_i64()
            .map(Money)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (rupees, dollars, ...).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Renders the amount with two decimals and no currency symbol.
///
/// The symbol is a display preference and is added by the app's
/// configuration (`ConfigState::format_price`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
