//! Common status envelope for successful responses.

use serde::Serialize;

/// `{"status": "OK"}` marker shared by success bodies.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
}

/// Body returned by endpoints with nothing else to report.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: Status,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: Status::Ok }
    }
}
