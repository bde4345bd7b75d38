//! # Session Commands
//!
//! Tauri commands behind the Login/Register window.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Login/Register window                                                  │
//! │                                                                         │
//! │   [ Register ] ──► dialog (username, password) ──► register()          │
//! │   [  Login   ] ──► dialog (username, password) ──► login()             │
//! │                                                        │                │
//! │                                    authenticated: true │                │
//! │                                                        ▼                │
//! │                              Inventory Management window               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither response carries the password or its hash.

use serde::Serialize;
use tauri::State;
use tracing::debug;

use super::auth::{self, LoginOutcome};
use crate::error::ApiError;
use crate::state::{DbState, SessionState};

/// Returned by `register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: i64,
    pub username: String,
}

/// Returned by `login`.
///
/// Wrong credentials are not an error: `authenticated` is false and the
/// window stays on the login gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub authenticated: bool,
    pub username: Option<String>,
}

/// Registers a user from the credentials dialog.
pub async fn register_account(
    db: &DbState,
    username: &str,
    password: &str,
) -> Result<RegisterResponse, ApiError> {
    let user = auth::register(db, username, password).await?;

    Ok(RegisterResponse {
        user_id: user.id,
        username: user.username,
    })
}

/// Checks credentials and, on success, moves the session to the inventory
/// screen.
pub async fn log_in(
    db: &DbState,
    session: &SessionState,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    match auth::login(db, username, password).await? {
        LoginOutcome::Authenticated(user) => {
            let username = user.username.clone();
            session.with_session_mut(|s| s.authenticate(user));

            Ok(LoginResponse {
                authenticated: true,
                username: Some(username),
            })
        }
        LoginOutcome::Unauthenticated => Ok(LoginResponse {
            authenticated: false,
            username: None,
        }),
    }
}

/// Registers a new user.
///
/// ## Frontend Usage
/// ```javascript
/// await invoke('register', { username, password });
/// ```
///
/// ## Errors
/// * `VALIDATION_ERROR` - username or password is empty
/// * `CONFLICT` - username already exists
#[tauri::command]
pub async fn register(
    db: State<'_, DbState>,
    username: String,
    password: String,
) -> Result<RegisterResponse, ApiError> {
    debug!(username = %username, "register command");
    register_account(&db, &username, &password).await
}

/// Logs in.
///
/// ## Frontend Usage
/// ```javascript
/// const { authenticated } = await invoke('login', { username, password });
/// ```
#[tauri::command]
pub async fn login(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    debug!(username = %username, "login command");
    log_in(&db, &session, &username, &password).await
}
