//! Error types for the Sauti voice gateway

use thiserror::Error;

/// Classifies every way a synthesis call can fail.
///
/// Upstream failures (`Connection`, `Timeout`, `UpstreamStatus`, `Protocol`)
/// are constructed at the client boundary and translated into caller-facing
/// statuses by the server. `InvalidRequest` is raised before any network
/// activity.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid synthesis request: {0}")]
    InvalidRequest(String),

    #[error("Audio framing error: {0}")]
    Audio(String),

    #[error("Service unavailable: {0}")]
    Connection(String),

    #[error("Service unavailable: upstream request timed out")]
    Timeout,

    #[error("Upstream HTTP {code}: {body}")]
    UpstreamStatus { code: u16, body: String },

    #[error("Upstream protocol violation: {0}")]
    Protocol(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_decode() || err.is_body() {
            // The connection was established but the response bytes could not
            // be read back intact.
            Error::Protocol(err.to_string())
        } else {
            Error::Connection(err.to_string())
        }
    }
}
