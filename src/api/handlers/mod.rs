//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod redirect;
pub mod url;

pub use auth::{login_handler, register_handler};
pub use health::health_handler;
pub use redirect::{delete_url_handler, redirect_handler};
pub use url::save_url_handler;
