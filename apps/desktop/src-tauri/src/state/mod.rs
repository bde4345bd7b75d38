//! # State Module
//!
//! Application state for the Stockroom front end.
//!
//! Each concern gets its own state type, and handlers take only the pieces
//! they need:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────────────┐  │
//! │  │   DbState    │  │   ConfigState    │  │  SessionState (Mutex)    │  │
//! │  │              │  │                  │  │                          │  │
//! │  │  Database    │  │  db_path         │  │  LoginGate               │  │
//! │  │  (SQLite     │  │  currency_symbol │  │     │ login ok           │  │
//! │  │   pool)      │  │  log_filter      │  │     ▼                    │  │
//! │  │              │  │                  │  │  Inventory {             │  │
//! │  │              │  │                  │  │    user,                 │  │
//! │  │              │  │                  │  │    InventoryScreen       │  │
//! │  │              │  │                  │  │  }                       │  │
//! │  └──────────────┘  └──────────────────┘  └──────────────────────────┘  │
//! │                                                                         │
//! │  • DbState: pool is opened once and held for the process lifetime      │
//! │  • ConfigState: read-only after startup                                │
//! │  • SessionState: shared by all commands, locked per state change       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod inventory;
mod session;

pub use config::{ConfigError, ConfigState};
pub use db::DbState;
pub use inventory::{
    InventoryScreen, InventoryView, ListEntry, ProductForm, EMPTY_LIST_MARKER, LOW_STOCK_WARNING,
};
pub use session::{Screen, Session, SessionState};
