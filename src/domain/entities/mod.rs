//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored alias → URL mapping
//! - [`User`] - A registered account
//! - [`Claims`] - Identity carried by a bearer token
//!
//! Creation inputs use separate structs (`NewUrlRecord`, `NewUser`) since the
//! id is assigned by the store.

pub mod claims;
pub mod url_record;
pub mod user;

pub use claims::Claims;
pub use url_record::{NewUrlRecord, UrlRecord};
pub use user::{NewUser, User};
