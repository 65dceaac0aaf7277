//! Alias allocation and URL record lifecycle.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::alias::{generate_alias, generate_unreserved_alias, validate_alias};
use crate::utils::url_check::validate_target_url;
use serde_json::json;

/// Service for creating, resolving and deleting short URLs.
///
/// Uniqueness is decided by the store: the allocator simply attempts the
/// insert and reacts to a conflict, so concurrent requests racing on the same
/// alias resolve to one winner.
pub struct LinkService<L: UrlRepository> {
    repository: Arc<L>,
    alias_length: usize,
    max_attempts: usize,
}

impl<L: UrlRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// # Arguments
    ///
    /// - `repository` - URL record store
    /// - `alias_length` - length of generated aliases
    /// - `max_attempts` - how many generated aliases to try before giving up
    pub fn new(repository: Arc<L>, alias_length: usize, max_attempts: usize) -> Self {
        Self {
            repository,
            alias_length,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Stores `url` under `alias`, or under a generated alias if none is given.
    ///
    /// # Alias allocation
    ///
    /// - Explicit alias: validated, then saved exactly once. A taken alias is
    ///   reported as a conflict without retrying.
    /// - No alias (or an empty one): a random alias of the configured length is
    ///   generated, skipping reserved route names, and saved. On conflict a new
    ///   alias is generated, up to `max_attempts` times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or the alias is invalid.
    /// Returns [`AppError::Conflict`] if an explicit alias is already taken.
    /// Returns [`AppError::Internal`] if every generated alias collided or the
    /// store fails.
    pub async fn create_url(
        &self,
        url: String,
        alias: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        validate_target_url(&url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        match alias.filter(|a| !a.is_empty()) {
            Some(alias) => self.save_requested_alias(url, alias).await,
            None => self.save_generated_alias(url).await,
        }
    }

    async fn save_requested_alias(&self, url: String, alias: String) -> Result<UrlRecord, AppError> {
        validate_alias(&alias)?;

        match self.repository.save(NewUrlRecord::new(alias.clone(), url)).await {
            Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                "Alias already taken",
                json!({ "alias": alias }),
            )),
            result => result,
        }
    }

    async fn save_generated_alias(&self, url: String) -> Result<UrlRecord, AppError> {
        for attempt in 1..=self.max_attempts {
            let alias = generate_unreserved_alias(self.alias_length, generate_alias);

            match self
                .repository
                .save(NewUrlRecord::new(alias, url.clone()))
                .await
            {
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!(attempt, "Generated alias collided, retrying");
                }
                result => return result,
            }
        }

        tracing::error!(
            attempts = self.max_attempts,
            alias_length = self.alias_length,
            "Alias space exhausted"
        );

        Err(AppError::internal(
            "Alias space exhausted",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }

    /// Resolves an alias to its record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this alias.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_url(&self, alias: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found("url not found", json!({ "alias": alias })))
    }

    /// Deletes the record with the given alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this alias.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_url(&self, alias: &str) -> Result<(), AppError> {
        if !self.repository.delete(alias).await? {
            return Err(AppError::not_found(
                "url not found",
                json!({ "alias": alias }),
            ));
        }

        Ok(())
    }

    /// Lists stored records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` or `page_size` is below 1.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_urls(&self, page: i64, page_size: i64) -> Result<Vec<UrlRecord>, AppError> {
        if page < 1 || page_size < 1 {
            return Err(AppError::bad_request(
                "page and page_size must be at least 1",
                json!({ "page": page, "page_size": page_size }),
            ));
        }

        self.repository.list(page, page_size).await
    }

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_urls(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
