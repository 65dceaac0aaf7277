//! Handlers for account registration and login.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::auth::{CredentialsRequest, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account and returns a bearer token for it.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// ```json
/// { "email": "a@b.com", "password": "secret" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the email or password is invalid
/// - 409 Conflict if the email is already registered
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let token = state
        .auth_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}

/// Exchanges valid credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Errors
///
/// - 400 Bad Request if the body is invalid
/// - 401 Unauthorized on unknown email or wrong password
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let token = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}
