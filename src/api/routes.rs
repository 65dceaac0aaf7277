//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, health_handler, login_handler, redirect_handler, register_handler,
    save_url_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

/// Builds all API routes.
///
/// `GET /{alias}` and `DELETE /{alias}` share a path, so authentication is
/// attached per method rather than per router.
///
/// # Endpoints
///
/// Public:
/// - `GET    /{alias}`   - Redirect to the stored URL
/// - `POST   /register`  - Create an account, returns a token
/// - `POST   /login`     - Exchange credentials for a token
/// - `GET    /health`    - Health check
///
/// Bearer token required:
/// - `POST   /url`       - Store a URL under a requested or generated alias
/// - `DELETE /{alias}`   - Delete a stored URL
pub fn routes(state: &AppState) -> Router<AppState> {
    let require_auth = middleware::from_fn_with_state(state.clone(), auth::layer);

    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/health", get(health_handler))
        .route(
            "/url",
            post(save_url_handler).route_layer(require_auth.clone()),
        )
        .route(
            "/{alias}",
            get(redirect_handler).merge(delete(delete_url_handler).route_layer(require_auth)),
        )
}
