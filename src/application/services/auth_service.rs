//! Registration, login and bearer token authentication.

use serde_json::json;
use std::sync::Arc;

use crate::application::services::{PasswordService, TokenService};
use crate::domain::entities::{Claims, NewUser};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for user credentials and token-based authentication.
///
/// Combines the user repository with the password hasher and the token
/// issuer. Emails are compared after trimming and lowercasing.
pub struct AuthService<U: UserRepository> {
    repository: Arc<U>,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<U>, passwords: Arc<PasswordService>, tokens: Arc<TokenService>) -> Self {
        Self {
            repository,
            passwords,
            tokens,
        }
    }

    /// Registers a new user and returns a token for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] if hashing, storage or signing fails.
    pub async fn register(&self, email: &str, password: &str) -> Result<String, AppError> {
        let email = normalize_email(email);

        let passwords = self.passwords.clone();
        let password = password.to_owned();
        let password_hash = run_blocking(move || passwords.hash(&password)).await?;

        let user = self
            .repository
            .create(NewUser {
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "User registered");

        self.tokens.issue(user.id, &user.email)
    }

    /// Checks credentials and returns a fresh token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for an unknown email or a wrong
    /// password; the two cases are reported identically.
    /// Returns [`AppError::Internal`] on storage or signing failures.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let email = normalize_email(email);

        let Some(user) = self.repository.find_by_email(&email).await? else {
            tracing::info!("Login failed: unknown email");
            return Err(bad_credentials());
        };

        let passwords = self.passwords.clone();
        let password = password.to_owned();
        let stored_hash = user.password_hash.clone();
        let matches = run_blocking(move || passwords.verify(&stored_hash, &password)).await?;

        if !matches {
            tracing::info!(user_id = user.id, "Login failed: wrong password");
            return Err(bad_credentials());
        }

        tracing::info!(user_id = user.id, "User logged in");

        self.tokens.issue(user.id, &user.email)
    }

    /// Verifies a bearer token and returns the identity it carries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid or expired.
    pub fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        self.tokens.verify(token)
    }
}

/// Canonical form used to store and look up emails.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Runs CPU-bound work (Argon2) on Tokio's blocking thread pool.
async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        tracing::error!(error = %e, "Blocking task failed");
        AppError::internal("Internal error", json!({}))
    })?
}

fn bad_credentials() -> AppError {
    AppError::unauthorized("bad credentials", json!({}))
}
