//! Handler for URL creation.

use axum::{Extension, Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::status::Status;
use crate::api::dto::url::{SaveUrlRequest, SaveUrlResponse};
use crate::domain::entities::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a requested or generated alias.
///
/// # Endpoint
///
/// `POST /url` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "ex1" }
/// ```
///
/// `alias` is optional. When it is missing or empty a random alias is
/// generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex1" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the URL or alias is invalid (including reserved aliases)
/// - 409 Conflict if the requested alias is taken
pub async fn save_url_handler(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<SaveUrlRequest>, JsonRejection>,
) -> Result<Json<SaveUrlResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state
        .link_service
        .create_url(payload.url, payload.alias)
        .await?;

    tracing::info!(id = record.id, alias = %record.alias, user_id = claims.uid, "URL saved");

    Ok(Json(SaveUrlResponse {
        status: Status::Ok,
        alias: record.alias,
    }))
}
