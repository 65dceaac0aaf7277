//! # URL Shortener
//!
//! A small URL shortening service with user accounts, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Alias allocation, credentials and tokens
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Explicit or randomly generated aliases with bounded collision retry
//! - `303 See Other` redirects
//! - Account registration and login with Argon2id password hashes
//! - Time-limited HS256 bearer tokens guarding URL creation and deletion
//!
//! ## Quick Start
//!
//! ```bash
//! export JWT_SECRET="change-me"
//! export STORAGE_PATH="./storage/url-shortener.db"  # Optional
//!
//! # Migrations are applied on startup
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthService, LinkService, PasswordService, TokenService,
    };
    pub use crate::domain::entities::{Claims, NewUrlRecord, NewUser, UrlRecord, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
