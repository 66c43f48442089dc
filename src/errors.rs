//! Error types for geosafe.
//!
//! Uses `thiserror` for library-style error definitions.

use thiserror::Error;

/// Errors that can occur in geosafe operations.
#[derive(Error, Debug)]
pub enum GeosafeError {
    /// Request was sent but no response came back (connect failure, timeout)
    #[error("no response from safety API: {0}")]
    Transport(#[source] reqwest::Error),

    /// Request could not be constructed, or the client could not be built
    #[error("request setup failed: {0}")]
    Setup(#[source] reqwest::Error),

    /// Server responded with a status outside the 2xx range
    #[error("safety API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// Response body was not the expected JSON shape
    #[error("failed to decode scores payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Data validation failed
    #[error("invalid data: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for GeosafeError {
    /// Builder problems are setup errors; everything that died in flight
    /// is a no-response transport error.
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Setup(err)
        } else {
            Self::Transport(err)
        }
    }
}
