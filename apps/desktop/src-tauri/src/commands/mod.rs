//! # Commands Module
//!
//! Tauri commands exposed to the frontend, and the store operations behind
//! them.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── session.rs    ◄─── Tauri: register, login
//! ├── inventory.rs  ◄─── Tauri: list/select/add/edit/delete product
//! ├── auth.rs       ◄─── Credential checks against the users table
//! └── product.rs    ◄─── Product CRUD against the products table
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend (JavaScript)                                                  │
//! │         │                                                               │
//! │         │  invoke('add_product', { form: { name, quantity, price } })  │
//! │         ▼                                                               │
//! │  #[tauri::command] inventory::add_product(db, config, session, form)   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  product::add_product(&db, name, qty, price)                           │
//! │         │   parse + validate (stockroom-core)                          │
//! │         │   INSERT (stockroom-db)                                      │
//! │         ▼                                                               │
//! │  Result<ProductAdded, ApiError>  ──► JSON to the frontend              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Frontend re-renders the list, or shows an "Error" box                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each Tauri command is a thin wrapper over a plain async function taking
//! `&DbState`, `&ConfigState` and `&SessionState`, so tests can drive the
//! same paths without a running window.

pub mod auth;
pub mod inventory;
pub mod product;
pub mod session;
