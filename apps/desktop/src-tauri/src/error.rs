//! # API Error Type
//!
//! Unified error type returned by every command.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  User action (button click → invoke)                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  → Result<T, ApiError>                         │  │
//! │  │                                                                  │  │
//! │  │  ValidationError ──► CoreError ──┐                               │  │
//! │  │                                  ├──► ApiError { code, message } │  │
//! │  │  sqlx::Error ──► DbError ────────┘                               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Frontend shows an "Error" box with <message>; window stays usable     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store failures are logged with their cause; the screen gets a generic
//! message.

use serde::Serialize;
use stockroom_core::{CoreError, ValidationError};
use stockroom_db::DbError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "CONFLICT",
///   "message": "Username 'alice' already exists"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Empty or unparseable input
    ValidationError,

    /// Duplicate username
    Conflict,

    /// No row, or no valid row, chosen for edit/delete
    SelectionError,

    /// Underlying persistence failure
    StoreError,

    /// Inventory command issued before login
    NotLoggedIn,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Conflict, message)
    }

    /// Creates a selection error.
    pub fn selection(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::SelectionError, message)
    }

    /// Creates a store error.
    pub fn store(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::StoreError, message)
    }

    /// Error for inventory commands issued at the login gate.
    pub fn not_logged_in() -> Self {
        ApiError::new(ErrorCode::NotLoggedIn, "Log in to manage inventory")
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            // Only UPDATE/DELETE by id report NotFound: the chosen row is gone
            DbError::NotFound { entity, id } => {
                ApiError::selection(format!("{} not found: {}", entity, id))
            }
            DbError::UniqueViolation { field, value } => {
                ApiError::conflict(format!("{} '{}' already exists", field, value))
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::store("Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::store("Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                ApiError::store("Database operation failed")
            }
            DbError::PoolExhausted => ApiError::store("Database pool exhausted"),
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::store("Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => {
                ApiError::selection(format!("Product not found: {}", id))
            }
            CoreError::UsernameTaken(name) => {
                ApiError::conflict(format!("Username '{}' already exists", name))
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_mapping() {
        let err: ApiError = DbError::not_found("Product", 3).into();
        assert_eq!(err.code, ErrorCode::SelectionError);
        assert_eq!(err.message, "Product not found: 3");

        let err: ApiError = DbError::duplicate("username", "alice").into();
        assert_eq!(err.code, ErrorCode::Conflict);

        let err: ApiError = DbError::QueryFailed("disk I/O error".to_string()).into();
        assert_eq!(err.code, ErrorCode::StoreError);
        assert!(!err.message.contains("disk"));
    }

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::UsernameTaken("bob".to_string()).into();
        assert_eq!(err.code, ErrorCode::Conflict);

        let err: ApiError = CoreError::Validation(ValidationError::required("name")).into();
        assert_eq!(err, ApiError::validation("name is required"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ApiError::selection("Select a product")).unwrap();
        assert_eq!(
            json,
            r#"{"code":"SELECTION_ERROR","message":"Select a product"}"#
        );
    }
}
