//! SQLite implementation of the user repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password: Vec<u8>,
}

/// SQLite repository for user credentials.
///
/// Stores only password hashes. Plaintext passwords never reach this layer.
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let result = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::conflict("User already exists", json!({ "email": new_user.email }))
                } else {
                    e.into()
                }
            })?;

        Ok(new_user.into_user(result.last_insert_rowid()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| User {
            id: r.id,
            email: r.email,
            password_hash: r.password,
        }))
    }
}
