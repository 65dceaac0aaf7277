//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`   - Redirect to the stored URL (public)
//! - `GET    /health`    - Health check (public)
//! - `POST   /register`  - Account registration (public)
//! - `POST   /login`     - Token issuance (public)
//! - `POST   /url`       - Save a URL (Bearer token required)
//! - `DELETE /{alias}`   - Delete a URL (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Bounded per-request processing time
//! - **Authentication** - Bearer token on mutating routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on handling a single request; slower
///   requests are answered with `408 Request Timeout`
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state, request_timeout))
}

/// Builds the routed application without path normalization.
pub fn api_router(state: AppState, request_timeout: Duration) -> Router {
    api::routes::routes(&state)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(tracing::layer())
}
