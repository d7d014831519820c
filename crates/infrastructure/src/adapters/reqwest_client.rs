//! Identity service client using reqwest.
//!
//! This adapter implements the `IdentityClient` port. It only moves bytes:
//! status codes and bodies are handed back untouched for the authenticator
//! to classify.

use std::time::Duration;

use quizgen_application::ports::{
    IdentityClient, IdentityRequest, IdentityResponse, TransportError,
};
use reqwest::{Client, Url};

use crate::config::HttpConfig;

/// Default User-Agent sent to the identity service.
pub const DEFAULT_USER_AGENT: &str = concat!("Quizgen/", env!("CARGO_PKG_VERSION"));

/// Identity service client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestIdentityClient {
    client: Client,
    timeout: Option<Duration>,
}

impl ReqwestIdentityClient {
    /// Creates a new client with default settings.
    ///
    /// Default configuration:
    /// - No request timeout
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "Quizgen/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        Self::from_config(&HttpConfig::default())
    }

    /// Creates a client from HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn from_config(config: &HttpConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }

    /// Configured timeout in milliseconds, or zero if none.
    #[allow(clippy::cast_possible_truncation)]
    fn timeout_ms(&self) -> u64 {
        self.timeout.map_or(0, |t| t.as_millis() as u64)
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(&self, error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                timeout_ms: self.timeout_ms(),
            };
        }

        if error.is_connect() {
            let host = error
                .url()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_else(|| "unknown".to_string());
            return TransportError::ConnectionFailed(format!("{host}: {error}"));
        }

        TransportError::Other(error.to_string())
    }
}

impl IdentityClient for ReqwestIdentityClient {
    async fn post_json(
        &self,
        request: &IdentityRequest,
    ) -> Result<IdentityResponse, TransportError> {
        let url = Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let mut builder = self.client.post(url).json(&request.body);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| self.map_error(&e))?;
        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("Failed to read body: {e}")))?
            .to_vec();

        Ok(IdentityResponse { status, body })
    }
}
