//! Identity service port

use std::future::Future;

use thiserror::Error;

/// A JSON POST to the identity service.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityRequest {
    /// Full endpoint URL.
    pub url: String,
    /// JSON request body.
    pub body: serde_json::Value,
}

/// Raw response from the identity service, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl IdentityResponse {
    /// Creates a response from a status code and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level failures: the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The endpoint URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for talking to the external identity service.
///
/// Implementations only move bytes; interpreting status codes and bodies is
/// the authenticator's job.
pub trait IdentityClient: Send + Sync {
    /// Sends a JSON POST and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if no response was received.
    fn post_json(
        &self,
        request: &IdentityRequest,
    ) -> impl Future<Output = Result<IdentityResponse, TransportError>> + Send;
}
