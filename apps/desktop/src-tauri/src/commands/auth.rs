//! # Auth Operations
//!
//! Registration and login against the `users` table.
//!
//! Passwords are stored as argon2 PHC strings with a random salt, and login
//! verifies against that hash. Usernames are compared exactly
//! (case-sensitive, no trimming).

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use tracing::{debug, error, info, warn};

use crate::error::ApiError;
use crate::state::DbState;
use stockroom_core::{validation::validate_credentials, CoreError, User};
use stockroom_db::DbError;

/// Result of a login attempt that reached the store.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Authenticated(User),
    Unauthenticated,
}

/// Registers a new user.
///
/// ## Errors
/// * `ValidationError` - username or password is empty (nothing is written)
/// * `Conflict` - username already exists
pub async fn register(db: &DbState, username: &str, password: &str) -> Result<User, ApiError> {
    debug!(username = %username, "register command");

    validate_credentials(username, password)?;

    let hash = hash_password(password)?;

    let user = match db.inner().users().insert(username, &hash).await {
        Ok(user) => user,
        Err(DbError::UniqueViolation { .. }) => {
            return Err(CoreError::UsernameTaken(username.to_string()).into())
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = user.id, username = %user.username, "User registered");
    Ok(user)
}

/// Checks credentials.
///
/// Unknown usernames and wrong passwords both yield `Unauthenticated`; an
/// error is returned only when the store itself fails.
pub async fn login(db: &DbState, username: &str, password: &str) -> Result<LoginOutcome, ApiError> {
    debug!(username = %username, "login command");

    let Some(user) = db.inner().users().get_by_username(username).await? else {
        warn!(username = %username, "Login rejected: unknown user");
        return Ok(LoginOutcome::Unauthenticated);
    };

    if !verify_password(password, &user.password_hash) {
        warn!(username = %username, "Login rejected: wrong password");
        return Ok(LoginOutcome::Unauthenticated);
    }

    info!(user_id = user.id, username = %user.username, "Login successful");
    Ok(LoginOutcome::Authenticated(user))
}

/// Hashes a password for storage.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            error!("Failed to hash password: {}", e);
            ApiError::store("Failed to store credentials")
        })?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored hash.
///
/// A hash that does not parse never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_db::{Database, DbConfig};

    async fn db() -> DbState {
        DbState::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    #[tokio::test]
    async fn test_register_twice_conflicts() {
        let db = db().await;

        let user = register(&db, "alice", "secret").await.unwrap();
        assert_eq!(user.username, "alice");

        let err = register(&db, "alice", "other").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(err.message, "Username 'alice' already exists");
        assert_eq!(db.inner().users().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_register_empty_fields_writes_nothing() {
        let db = db().await;

        let err = register(&db, "", "secret").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = register(&db, "bob", "").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert_eq!(db.inner().users().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_password_not_stored_verbatim() {
        let db = db().await;
        register(&db, "alice", "secret").await.unwrap();

        let stored = db
            .inner()
            .users()
            .get_by_username("alice")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.password_hash, "secret");
        assert!(stored.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_login() {
        let db = db().await;
        register(&db, "alice", "secret").await.unwrap();

        let outcome = login(&db, "alice", "secret").await.unwrap();
        assert!(matches!(outcome, LoginOutcome::Authenticated(u) if u.username == "alice"));

        let outcome = login(&db, "alice", "wrong").await.unwrap();
        assert!(matches!(outcome, LoginOutcome::Unauthenticated));

        let outcome = login(&db, "Alice", "secret").await.unwrap();
        assert!(matches!(outcome, LoginOutcome::Unauthenticated));

        let outcome = login(&db, "nobody", "secret").await.unwrap();
        assert!(matches!(outcome, LoginOutcome::Unauthenticated));
    }

    #[test]
    fn test_verify_password() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
        assert!(!verify_password("hunter2", "not-a-hash"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }
}
