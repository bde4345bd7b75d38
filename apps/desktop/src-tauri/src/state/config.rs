//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Config file (`stockroom.toml` in the working directory, optional)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use stockroom_core::Money;

/// Config file looked up in the working directory.
const CONFIG_FILE: &str = "stockroom.toml";

/// Database file name inside the platform data directory.
const DB_FILE_NAME: &str = "inventory.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Explicit database file. When unset the platform data directory is used.
    pub db_path: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Default tracing filter; `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Database: platform data directory
    /// - Currency: ₹
    /// - Logging: warnings and errors only
    fn default() -> Self {
        ConfigState {
            db_path: None,
            currency_symbol: "₹".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from `stockroom.toml` and `STOCKROOM_*` variables.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_DB_PATH`: database file
    /// - `STOCKROOM_CURRENCY_SYMBOL`: symbol shown before prices
    /// - `STOCKROOM_LOG_FILTER`: default tracing filter
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Loads configuration using `path` as the (optional) config file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()).required(false))
            .add_source(::config::Environment::with_prefix("STOCKROOM"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Resolves the database file path.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.stockroom.inventory/inventory.db`
    /// - **Windows**: `%APPDATA%\stockroom\inventory\data\inventory.db`
    /// - **Linux**: `~/.local/share/inventory/inventory.db`
    ///
    /// The data directory is created if it doesn't exist.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }

        let dirs = ProjectDirs::from("com", "stockroom", "inventory")
            .ok_or(ConfigError::NoDataDirectory)?;

        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DB_FILE_NAME))
    }

    /// Formats a price with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(Money::from_cents(250)), "₹2.50");
    /// ```
    pub fn format_price(&self, price: Money) -> String {
        if price.is_negative() {
            format!(
                "-{}{}",
                self.currency_symbol,
                Money::from_cents(-price.cents())
            )
        } else {
            format!("{}{}", self.currency_symbol, price)
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ::config::ConfigError),

    #[error("Could not determine app data directory")]
    NoDataDirectory,

    #[error("Could not create data directory: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(Money::from_cents(250)), "₹2.50");
        assert_eq!(config.format_price(Money::from_cents(300)), "₹3.00");
        assert_eq!(config.format_price(Money::zero()), "₹0.00");
        assert_eq!(config.format_price(Money::from_cents(-550)), "-₹5.50");
    }

    #[test]
    fn test_explicit_db_path_wins() {
        let config = ConfigState {
            db_path: Some(PathBuf::from("/tmp/custom.db")),
            ..ConfigState::default()
        };
        assert_eq!(
            config.database_path().unwrap(),
            PathBuf::from("/tmp/custom.db")
        );
    }

    #[test]
    fn test_default_logging_is_warnings_only() {
        assert_eq!(ConfigState::default().log_filter, "warn");
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config = ConfigState::load_from("does-not-exist-stockroom.toml").unwrap();
        assert_eq!(config.currency_symbol, ConfigState::default().currency_symbol);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "stockroom-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "currency_symbol = \"$\"\ndb_path = \"/tmp/shop.db\"\n",
        )
        .unwrap();

        let config = ConfigState::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/shop.db")));
        assert_eq!(config.log_filter, ConfigState::default().log_filter);
        assert_eq!(config.format_price(Money::from_cents(1234)), "$12.34");
    }
}
