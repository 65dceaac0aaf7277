//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`SqliteUrlRepository`] - URL record storage and retrieval
//! - [`SqliteUserRepository`] - User credential storage

pub mod pool;
pub mod sqlite_url_repository;
pub mod sqlite_user_repository;

pub use pool::connect;
pub use sqlite_url_repository::SqliteUrlRepository;
pub use sqlite_user_repository::SqliteUserRepository;
