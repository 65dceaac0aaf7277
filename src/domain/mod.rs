//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core data structures (URL records, users, token claims)
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits are implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
