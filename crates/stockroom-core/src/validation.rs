//! # Validation Module
//!
//! Turns raw text from the screen into validated domain values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (apps/desktop)                                        │
//! │  └── Collects raw strings from the three inputs / edit dialog          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Parsing (quantity → i64, price → Money)                           │
//! │  └── Business rules (non-empty, non-negative, length)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── UNIQUE(username)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::parse_new_product;
//!
//! let product = parse_new_product("  Widget ", "10", "2.5").unwrap();
//! assert_eq!(product.name, "Widget");
//! assert_eq!(product.price.cents(), 250);
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewProduct, StockUpdate};
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Credentials
// =============================================================================

/// Validates registration credentials.
///
/// ## Rules
/// - Neither field may be empty
/// - No trimming: credentials are compared exactly as typed
pub fn validate_credentials(username: &str, password: &str) -> ValidationResult<()> {
    if username.is_empty() {
        return Err(ValidationError::required("username"));
    }

    if password.is_empty() {
        return Err(ValidationError::required("password"));
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Surrounding whitespace is removed
/// - Must not be empty after trimming
/// - At most [`MAX_PRODUCT_NAME_LEN`] characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a quantity typed by the user.
///
/// ## Rules
/// - Must be a whole number (`"10"`, `" 3 "`)
/// - Must not be negative (zero is allowed: out of stock)
///
/// ```rust
/// use stockroom_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("10"), Ok(10));
/// assert!(parse_quantity("ten").is_err());
/// assert!(parse_quantity("-1").is_err());
/// ```
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::required("quantity"));
    }

    let quantity: i64 = input
        .parse()
        .map_err(|_| ValidationError::invalid_format("quantity", "must be a whole number"))?;

    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(quantity)
}

/// Parses a price typed by the user into [`Money`].
///
/// Any decimal is accepted, including exponent notation, and rounded to
/// cents (half away from zero).
///
/// ## Accepted Forms
/// ```text
/// "3"        → 300 cents
/// "2.5"      → 250 cents
/// ".75"      →  75 cents
/// "2.505"    → 251 cents
/// "2.499999" → 250 cents
/// "1e2"      → 10000 cents
/// "-1"       → error (negative)
/// "inf"      → error (not a number)
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::required("price"));
    }

    let canonical = canonical_decimal(input).ok_or_else(|| {
        ValidationError::invalid_format("price", "must be a number like 2.50")
    })?;

    let out_of_range = || ValidationError::invalid_format("price", "value is out of range");

    let amount = if canonical.contains('e') {
        Decimal::from_scientific(&canonical)
    } else {
        Decimal::from_str(&canonical)
    }
    .map_err(|_| out_of_range())?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Money::from_decimal(amount).ok_or_else(out_of_range)
}

/// Checks decimal syntax and rewrites it as `[-]int.frac[e[-]exp]`.
///
/// Returns `None` for anything that is not a plain decimal number.
fn canonical_decimal(input: &str) -> Option<String> {
    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return None;
    }

    let mut canonical = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if whole.is_empty() { "0" } else { whole },
        if fraction.is_empty() { "0" } else { fraction },
    );

    if let Some(exponent) = exponent {
        let (exp_negative, digits) = match exponent.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, exponent.strip_prefix('+').unwrap_or(exponent)),
        };
        if digits.is_empty() || !is_digits(digits) {
            return None;
        }
        canonical.push('e');
        if exp_negative {
            canonical.push('-');
        }
        canonical.push_str(digits);
    }

    Some(canonical)
}

// =============================================================================
// Composite Parsers
// =============================================================================

/// Validates the three inputs of the add form.
///
/// Quantity and price are checked before the name, so a form with both a
/// bad number and an empty name reports the number.
pub fn parse_new_product(name: &str, quantity: &str, price: &str) -> ValidationResult<NewProduct> {
    let quantity = parse_quantity(quantity)?;
    let price = parse_price(price)?;
    let name = validate_product_name(name)?;

    Ok(NewProduct {
        name,
        quantity,
        price,
    })
}

/// Validates the two values collected by the edit dialog.
pub fn parse_stock_update(quantity: &str, price: &str) -> ValidationResult<StockUpdate> {
    Ok(StockUpdate {
        quantity: parse_quantity(quantity)?,
        price: parse_price(price)?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
