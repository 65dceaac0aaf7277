//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! - [`persistence`] - SQLite repository implementations and pool setup

pub mod persistence;
