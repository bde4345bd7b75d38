//! # Database State
//!
//! Wraps the `Database` connection for use in commands.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn list_products(db: &DbState) -> Result<Vec<Product>, ApiError> {
//!     Ok(db.inner().products().list().await?)
//! }
//! ```

use stockroom_db::Database;

/// Handle to the store, opened once at startup.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Closes the underlying pool. Called once on shutdown.
    pub async fn close(&self) {
        self.db.close().await;
    }
}
