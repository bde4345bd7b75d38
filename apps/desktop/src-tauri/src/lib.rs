//! # Stockroom Desktop Library
//!
//! Core library for the Stockroom Tauri application.
//! This is the main entry point that configures and runs the app.
//!
//! ## Module Organization
//! ```text
//! stockroom_desktop_lib/
//! ├── lib.rs            ◄─── You are here (app setup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── db.rs         ◄─── Database state wrapper
//! │   ├── config.rs     ◄─── Configuration state
//! │   ├── session.rs    ◄─── LoginGate → Inventory state machine (Mutex)
//! │   └── inventory.rs  ◄─── Form, rendered list, selection
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── session.rs    ◄─── Tauri: register / login
//! │   ├── inventory.rs  ◄─── Tauri: product list, select, add, edit, delete
//! │   ├── auth.rs       ◄─── Credential hashing and checks
//! │   └── product.rs    ◄─── Product CRUD
//! └── error.rs          ◄─── API error type for commands
//! ```
//!
//! The two windows themselves are static HTML/JS in `apps/desktop/ui`.

pub mod commands;
pub mod error;
pub mod state;

use tauri::{Manager, RunEvent};
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, DbState, SessionState};
use stockroom_db::{Database, DbConfig};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults < stockroom.toml < STOCKROOM_* env                       │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter (default: warn)                │
/// │     • RUST_LOG overrides the configured filter                          │
/// │                                                                         │
/// │  3. Determine Database Path ──────────────────────────────────────────► │
/// │     • STOCKROOM_DB_PATH / db_path, else the platform data directory     │
/// │                                                                         │
/// │  4. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  5. Initialize State Objects ─────────────────────────────────────────► │
/// │     • DbState, ConfigState, SessionState (at the login gate)            │
/// │                                                                         │
/// │  6. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Launch the Login/Register window                                  │
/// │     • Close the pool on exit                                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigState::load()?;

    init_tracing(&config);

    info!("Starting Stockroom");

    let app = tauri::Builder::default()
        // Setup hook runs before the window opens
        .setup(move |app| {
            let db_path = config.database_path()?;
            info!(?db_path, "Database path determined");

            // Initialize database (blocking in setup, async in runtime)
            let db = tauri::async_runtime::block_on(async {
                let db = Database::new(DbConfig::new(db_path)).await?;
                let (total, applied) = db.migration_status().await?;
                let products = db.products().count().await?;
                info!(
                    migrations_total = total,
                    migrations_applied = applied,
                    products = products,
                    "Database connected and migrations applied"
                );
                Ok::<_, stockroom_db::DbError>(db)
            })?;

            app.manage(DbState::new(db));
            app.manage(config);
            app.manage(SessionState::new());

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Login/Register window
            commands::session::register,
            commands::session::login,
            // Inventory Management window
            commands::inventory::list_products,
            commands::inventory::select_product,
            commands::inventory::begin_edit,
            commands::inventory::add_product,
            commands::inventory::edit_product,
            commands::inventory::delete_product,
        ])
        .build(tauri::generate_context!())?;

    app.run(|handle, event| {
        if let RunEvent::Exit = event {
            if let Some(db) = handle.try_state::<DbState>() {
                tauri::async_runtime::block_on(db.close());
            }
            info!("Session ended");
        }
    });

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: `log_filter` from configuration
fn init_tracing(config: &ConfigState) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
