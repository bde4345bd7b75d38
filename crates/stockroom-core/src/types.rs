//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │    Product      │   │   NewProduct    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  name           │       │
//! │  │  username       │   │  name           │   │  quantity       │       │
//! │  │  password_hash  │   │  quantity       │   │  price (Money)  │       │
//! │  └─────────────────┘   │  price_cents    │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Ids are SQLite `AUTOINCREMENT` integers: assigned by the store, never
//! reused after a row is deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// User
// =============================================================================

/// A registered user.
///
/// Created at registration and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Store-assigned identifier.
    pub id: i64,

    /// Unique login name (case-sensitive).
    pub username: String,

    /// Argon2 PHC string. Never the plaintext password.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// A product row in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Units on hand (never negative).
    pub quantity: i64,

    /// Unit price in cents.
    pub price_cents: i64,

    /// When the product was added.
    pub created_at: DateTime<Utc>,

    /// When quantity/price last changed.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether this product should carry the low-stock warning.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        crate::is_low_stock(self.quantity)
    }
}

/// Validated input for creating a product.
///
/// Built by [`crate::validation::parse_new_product`]; the store assigns the
/// id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub price: Money,
}

/// Validated replacement values for an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockUpdate {
    pub quantity: i64,
    pub price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(quantity: i64) -> Product {
        let now = Utc::now();
        Product {
            id: 1,
            name: "Widget".to_string(),
            quantity,
            price_cents: 250,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_product_price() {
        assert_eq!(product(10).price(), Money::from_cents(250));
    }

    #[test]
    fn test_product_low_stock() {
        assert!(product(3).is_low_stock());
        assert!(!product(5).is_low_stock());
    }

    #[test]
    fn test_user_serialization_omits_hash() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2"));
    }
}
