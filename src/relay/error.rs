//! Relay error taxonomy.

use reqwest::header::{HeaderName, InvalidHeaderValue};
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while relaying one envelope.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Inbound body is not a well-formed envelope.
    #[error("Invalid request: {0}")]
    Decode(#[from] serde_json::Error),

    /// Envelope could not be turned into an HTTP request.
    #[error("Failed to create request: {0}")]
    Build(#[from] BuildError),

    /// Upstream could not be reached (DNS, connect, TLS, timeout).
    ///
    /// The message ends with the root cause, since reqwest keeps it in the
    /// source chain rather than in its own text.
    #[error("API request failed: {}", error_chain(.0))]
    Transport(#[source] reqwest::Error),

    /// HTTP client could not be constructed at startup.
    #[error("Failed to initialize upstream client: {0}")]
    ClientInit(#[source] reqwest::Error),

    /// Configured session header is not a valid header name.
    #[error("Invalid session header name {0:?}")]
    SessionHeader(String),
}

impl RelayError {
    /// Status code reported to the calling client.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Decode(_) => StatusCode::BAD_REQUEST,
            RelayError::Build(_)
            | RelayError::Transport(_)
            | RelayError::ClientInit(_)
            | RelayError::SessionHeader(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Reasons an envelope cannot become an outbound request.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid method {method:?}")]
    Method { method: String },

    #[error("invalid endpoint {endpoint:?}: {source}")]
    Url {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("body could not be serialized: {0}")]
    Body(#[source] serde_json::Error),

    #[error("invalid value for header {name}: {source}")]
    Header {
        name: HeaderName,
        #[source]
        source: InvalidHeaderValue,
    },
}

/// Join an error and all of its sources with `": "`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;
