//! Wire types for the auth endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Status the refresh endpoint uses for "no valid session".
pub const STATUS_NO_SESSION: u16 = 400;

/// Raw reply from the refresh endpoint. `body` is left empty when the status
/// means the body is not worth reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshReply {
    pub status: u16,
    pub body: String,
}

/// Body of a successful refresh.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub is_installed: bool,
}

impl RefreshTokenResponse {
    /// # Errors
    ///
    /// Returns the JSON error when the body lacks either field or is not JSON.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Errors raised by the transport before any HTTP status is available.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request was rejected by the browser or network.
    #[error("request failed: {0}")]
    Network(String),

    /// The request did not settle within the timeout.
    #[error("request timed out")]
    Timeout,
}
