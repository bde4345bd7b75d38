//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate contains the domain of the inventory manager as pure
//! functions and plain types, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (apps/desktop)                     │   │
//! │  │        Login Gate ──► Inventory Screen (form + list)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               Auth / Inventory commands                         │   │
//! │  │     register, login, add_product, edit_product, ...             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │   types   │  │   money   │  │ validation│                 │   │
//! │  │   │  Product  │  │   Money   │  │  parsing  │                 │   │
//! │  │   │   User    │  │           │  │   rules   │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, Product, NewProduct)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing and business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::validation::{parse_price, parse_quantity};
//!
//! let price = parse_price("2.50").unwrap();
//! assert_eq!(price.cents(), 250);
//!
//! let qty = parse_quantity("3").unwrap();
//! assert!(stockroom_core::is_low_stock(qty));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Products with a quantity strictly below this value are flagged as low
/// stock in the inventory list.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Returns true if `quantity` is below [`LOW_STOCK_THRESHOLD`].
///
/// ```rust
/// use stockroom_core::is_low_stock;
///
/// assert!(is_low_stock(4));
/// assert!(!is_low_stock(5));
/// ```
#[inline]
pub const fn is_low_stock(quantity: i64) -> bool {
    quantity < LOW_STOCK_THRESHOLD
}
