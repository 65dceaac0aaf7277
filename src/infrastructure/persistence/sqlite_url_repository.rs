//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    alias: String,
    url: String,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.id, row.alias, row.url)
    }
}

/// SQLite repository for URL records.
///
/// Relies on the `UNIQUE` constraint on `url.alias` to reject duplicates.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let result = sqlx::query("INSERT INTO url (alias, url) VALUES (?, ?)")
            .bind(&new_record.alias)
            .bind(&new_record.url)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::conflict(
                        "Alias already exists",
                        json!({ "alias": new_record.alias }),
                    )
                } else {
                    e.into()
                }
            })?;

        Ok(new_record.into_record(result.last_insert_rowid()))
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>("SELECT id, alias, url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn delete(&self, alias: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<UrlRecord>, AppError> {
        let offset = (page - 1) * page_size;

        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, alias, url
            FROM url
            ORDER BY id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
