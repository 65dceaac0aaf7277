//! Bearer token issuing and verification.
//!
//! Tokens are HS256-signed JWTs carrying [`Claims`]. They are stateless: a
//! token stays valid until it expires, whatever happens to the account.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::json;

use crate::domain::entities::Claims;
use crate::error::AppError;

/// Lifetime of an issued token.
pub const TOKEN_TTL_HOURS: i64 = 3;

/// Mints and validates signed, time-limited bearer tokens.
///
/// The signing secret is supplied at construction and never changes afterwards.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service signing with `secret`.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Issues a token for the given user, valid for [`TOKEN_TTL_HOURS`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String, AppError> {
        let exp = (Utc::now() + self.ttl).timestamp();
        self.sign(&Claims {
            uid: user_id,
            email: email.to_string(),
            exp,
        })
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, its
    /// signature does not match, or it has expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AppError::unauthorized("Invalid token", json!({ "reason": e.to_string() }))
            })
    }

    fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Token signing failed");
            AppError::internal("Failed to issue token", json!({}))
        })
    }
}
