//! # User Repository
//!
//! Database operations for registered users.
//!
//! Users are insert-only: there is no update or delete.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::User;

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Inserts a new user.
    ///
    /// ## Arguments
    /// * `username` - Unique login name
    /// * `password_hash` - Already-hashed credential (PHC string)
    ///
    /// ## Returns
    /// * `Ok(User)` - Inserted user with its generated id
    /// * `Err(DbError::UniqueViolation)` - Username already exists
    pub async fn insert(&self, username: &str, password_hash: &str) -> DbResult<User> {
        debug!(username = %username, "Inserting user");

        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::UniqueViolation { .. } => DbError::duplicate("username", username),
            other => other,
        })?;

        Ok(user)
    }

    /// Gets a user by exact (case-sensitive) username.
    ///
    /// ## Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No such user
    pub async fn get_by_username(&self, username: &str) -> DbResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Counts registered users.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let db = db().await;
        let users = db.users();

        let user = users.insert("alice", "hash-a").await.unwrap();
        assert!(user.id > 0);
        assert_eq!(user.username, "alice");

        let found = users.get_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.password_hash, "hash-a");
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let db = db().await;
        let users = db.users();

        users.insert("alice", "hash-a").await.unwrap();
        let err = users.insert("alice", "hash-b").await.unwrap_err();

        match err {
            DbError::UniqueViolation { field, value } => {
                assert_eq!(field, "username");
                assert_eq!(value, "alice");
            }
            other => panic!("expected UniqueViolation, got {other:?}"),
        }
        assert_eq!(users.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let db = db().await;
        let users = db.users();

        users.insert("Alice", "hash").await.unwrap();
        assert!(users.get_by_username("alice").await.unwrap().is_none());
        assert!(users.get_by_username("Alice").await.unwrap().is_some());
    }
}
