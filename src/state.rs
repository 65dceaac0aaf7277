//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::persistence::{SqliteUrlRepository, SqliteUserRepository};

/// Services shared by all request handlers.
///
/// Cloning is cheap; every field is reference-counted and immutable after
/// startup.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteUrlRepository>>,
    pub auth_service: Arc<AuthService<SqliteUserRepository>>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<SqliteUrlRepository>>,
        auth_service: Arc<AuthService<SqliteUserRepository>>,
    ) -> Self {
        Self {
            link_service,
            auth_service,
        }
    }
}
