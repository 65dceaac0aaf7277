//! DTOs for the URL creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::status::Status;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveUrlRequest {
    /// The original URL (must be a valid absolute URL).
    #[validate(url(message = "field url is not a valid URL"))]
    pub url: String,

    /// Optional alias; a random one is generated when absent or empty.
    #[serde(default)]
    #[validate(length(max = 64, message = "field alias is too long"))]
    pub alias: Option<String>,
}

/// Response with the alias the URL was stored under.
#[derive(Debug, Serialize)]
pub struct SaveUrlResponse {
    pub status: Status,
    pub alias: String,
}
