//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Command                                                               │
//! │       │  db.products().insert(&new_product)                            │
//! │       ▼                                                                 │
//! │  ProductRepository / UserRepository                                    │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  SQL lives only here; commands never build queries.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`UserRepository`](user::UserRepository) - Registration and credential lookup
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD

pub mod product;
pub mod user;
