//! Identity claims embedded in bearer tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried by every access token.
///
/// Attached to the request extensions by the auth middleware once the token
/// has been verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The user's database id.
    pub uid: i64,
    pub email: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Expiration as a UTC timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
