//! # Session State
//!
//! ```text
//! ┌──────────────┐   login ok    ┌───────────────────────────────┐
//! │  LoginGate   │ ────────────► │  Inventory { user, screen }   │
//! └──────────────┘               └───────────────────────────────┘
//! ```
//!
//! There is no way back: the session ends when the program exits.
//!
//! ## Thread Safety
//! Tauri commands can run concurrently, so the session lives behind
//! `Arc<Mutex<T>>`. The lock is only taken inside `with_*` closures and is
//! never held across an `.await`.

use std::sync::{Arc, Mutex, PoisonError};

use stockroom_core::User;

use super::InventoryScreen;
use crate::error::ApiError;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    LoginGate,
    Inventory,
}

/// The single user session.
#[derive(Debug, Default)]
pub enum Session {
    /// Initial state: register or log in.
    #[default]
    LoginGate,

    /// Entered only after a successful login.
    Inventory {
        user: User,
        screen: InventoryScreen,
    },
}

impl Session {
    /// Starts a session at the login gate.
    pub fn new() -> Self {
        Session::LoginGate
    }

    /// Returns the screen currently showing.
    pub fn screen(&self) -> Screen {
        match self {
            Session::LoginGate => Screen::LoginGate,
            Session::Inventory { .. } => Screen::Inventory,
        }
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::LoginGate => None,
            Session::Inventory { user, .. } => Some(user),
        }
    }

    /// Moves from the login gate to a fresh inventory screen.
    ///
    /// Has no effect once a user is logged in.
    pub fn authenticate(&mut self, user: User) {
        if let Session::LoginGate = self {
            *self = Session::Inventory {
                user,
                screen: InventoryScreen::new(),
            };
        }
    }

    pub fn inventory(&self) -> Option<&InventoryScreen> {
        match self {
            Session::LoginGate => None,
            Session::Inventory { screen, .. } => Some(screen),
        }
    }

    pub fn inventory_mut(&mut self) -> Option<&mut InventoryScreen> {
        match self {
            Session::LoginGate => None,
            Session::Inventory { screen, .. } => Some(screen),
        }
    }
}

/// Tauri-managed session state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a session at the login gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        // A panicking closure cannot leave the session half-updated
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }

    /// Executes a function with read access to the inventory screen.
    ///
    /// ## Errors
    /// `NotLoggedIn` while the login gate is showing.
    pub fn with_inventory<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&InventoryScreen) -> R,
    {
        self.with_session(|session| session.inventory().map(f))
            .ok_or_else(ApiError::not_logged_in)
    }

    /// Executes a function with write access to the inventory screen.
    ///
    /// ## Errors
    /// `NotLoggedIn` while the login gate is showing.
    pub fn with_inventory_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut InventoryScreen) -> R,
    {
        self.with_session_mut(|session| session.inventory_mut().map(f))
            .ok_or_else(ApiError::not_logged_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(name: &str) -> User {
        User {
            id: 1,
            username: name.to_string(),
            password_hash: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_starts_at_login_gate() {
        let session = Session::new();
        assert_eq!(session.screen(), Screen::LoginGate);
        assert!(session.user().is_none());
        assert!(session.inventory().is_none());
    }

    #[test]
    fn test_authenticate_enters_inventory() {
        let mut session = Session::new();
        session.authenticate(user("alice"));

        assert_eq!(session.screen(), Screen::Inventory);
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("alice"));
        assert!(session.inventory().unwrap().entries().is_empty());
    }

    #[test]
    fn test_second_authenticate_is_ignored() {
        let mut session = Session::new();
        session.authenticate(user("alice"));
        session.authenticate(user("bob"));

        assert_eq!(session.user().map(|u| u.username.as_str()), Some("alice"));
    }

    #[test]
    fn test_session_state_gates_inventory() {
        let state = SessionState::new();

        let err = state.with_inventory(|s| s.entries().len()).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotLoggedIn);

        state.with_session_mut(|s| s.authenticate(user("alice")));
        assert_eq!(state.with_inventory(|s| s.entries().len()).unwrap(), 0);

        state
            .with_inventory_mut(|s| s.form.name = "Widget".to_string())
            .unwrap();
        assert_eq!(state.with_inventory(|s| s.form.name.clone()).unwrap(), "Widget");
    }

    #[test]
    fn test_session_state_clones_share_session() {
        let state = SessionState::new();
        let other = state.clone();

        other.with_session_mut(|s| s.authenticate(user("alice")));
        assert_eq!(state.with_session(|s| s.screen()), Screen::Inventory);
    }
}
