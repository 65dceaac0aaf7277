//! Handlers for alias resolution and removal.

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::Redirect,
};

use crate::api::dto::status::StatusResponse;
use crate::domain::entities::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Returns `303 See Other` with the stored URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let record = state.link_service.get_url(&alias).await?;

    tracing::debug!(alias = %alias, "Redirecting");

    Ok(Redirect::to(&record.url))
}

/// Deletes the record behind an alias.
///
/// # Endpoint
///
/// `DELETE /{alias}` (Bearer token required)
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn delete_url_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<StatusResponse>, AppError> {
    state.link_service.delete_url(&alias).await?;

    tracing::info!(alias = %alias, user_id = claims.uid, "URL deleted");

    Ok(Json(StatusResponse::ok()))
}
