use std::time::Duration;

use thiserror::Error;

pub type Result<T, E = SourceError> = std::result::Result<T, E>;

/// Errors returned by every upstream adapter
///
/// All variants are terminal for the call that produced them. Nothing in
/// the adapters retries or recovers locally.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Caller input failed a precondition before any request was made
    #[error("{0}")]
    Validation(String),

    /// Upstream answered with a non-success status
    #[error("API error (status {status}): {body}")]
    Upstream {
        /// HTTP status from the upstream
        status: u16,
        /// Raw response body, verbatim
        body: String,
    },

    /// Upstream reported that the requested entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up (e.g. `CNPJ`)
        entity: &'static str,
        /// Identifier as it was sent upstream
        id: String,
    },

    /// Request did not complete within the configured timeout
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Caller cancelled the request before it completed
    #[error("request cancelled")]
    Cancelled,

    /// Connection-level failure while issuing the request or reading the body
    #[error("executing request: {0}")]
    Transport(#[source] reqwest::Error),

    /// Success status, but the body does not match the expected shape
    #[error("parsing response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request URL could not be assembled
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Adapter configuration cannot be turned into a request
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SourceError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Machine-readable error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Upstream { .. } => "upstream_error",
            Self::NotFound { .. } => "not_found",
            Self::Timeout(_) => "timeout",
            Self::Cancelled => "cancelled",
            Self::Transport(_) => "transport_error",
            Self::Decode(_) => "decode_error",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Config(_) => "config_error",
        }
    }

    /// Upstream HTTP status, when the failure carries one
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Map a `reqwest` failure, separating timeouts from other transport errors
    pub(crate) fn from_reqwest(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Transport(error)
        }
    }
}
