//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for alias → URL records.
///
/// Alias uniqueness is enforced by the storage layer (unique index), so two
/// writers racing on the same alias cannot both succeed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Deletes the record with the given alias.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no record matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, alias: &str) -> Result<bool, AppError>;

    /// Lists records ordered by id, newest first.
    ///
    /// # Arguments
    ///
    /// - `page` - Page number (1-indexed)
    /// - `page_size` - Number of items per page
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<UrlRecord>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
