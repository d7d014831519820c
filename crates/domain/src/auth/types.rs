//! Authentication exchange types

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::Role;

/// Message shown when the identity service rejects credentials without a detail.
pub const DEFAULT_CREDENTIALS_MESSAGE: &str = "Password or Secret is incorrect.";

/// Which identity service endpoint an exchange targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Existing account, `POST /auth/login`.
    #[default]
    Login,
    /// New account, `POST /api/auth/signup`.
    Signup,
}

impl AuthMode {
    /// Path of the endpoint relative to the backend origin.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Signup => "/api/auth/signup",
        }
    }

    /// Builds the full endpoint URL for an already-normalized origin.
    #[must_use]
    pub fn endpoint(self, origin: &str) -> String {
        format!("{origin}{}", self.path())
    }
}

/// What the user typed on the login or signup form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account name.
    pub identity: String,
    /// Backend origin as typed, possibly with a trailing slash.
    pub origin: String,
    /// Account password.
    pub password: String,
    /// Shared secret that selects the role tier.
    pub secret: String,
}

impl Credentials {
    /// Creates a new credential set.
    #[must_use]
    pub fn new(
        identity: impl Into<String>,
        origin: impl Into<String>,
        password: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            origin: origin.into(),
            password: password.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("origin", &self.origin)
            .field("password", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Canonical grant issued by the identity service on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    /// Bearer credential.
    pub access_token: String,
    /// Role string as returned by the service, not yet validated.
    pub role: String,
}

/// Result of a successful exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    /// Authenticated user name.
    pub identity: String,
    /// Validated role.
    pub role: Role,
}

/// Why an authentication exchange failed.
///
/// Every variant is recoverable: show the message and let the user retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// The request never completed.
    #[error("Network error: {message}")]
    Network {
        /// Transport error description.
        message: String,
    },

    /// The backend answered 404, almost always a wrong base URL.
    #[error("The backend link is wrong.")]
    Endpoint,

    /// The service rejected the password or secret.
    #[error("{message}")]
    Credentials {
        /// Server-provided detail, or the default message.
        message: String,
    },

    /// A success response whose body could not be understood.
    #[error("The server returned an unreadable response: {message}")]
    Parse {
        /// Parser error description.
        message: String,
    },

    /// The service granted a role this client does not know.
    #[error("The server returned an unrecognized role: {role}")]
    UnknownRole {
        /// The role string received.
        role: String,
    },
}

impl AuthFailure {
    /// Short title for the failure category.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Network { .. } => "Network Error",
            Self::Endpoint => "Wrong Backend",
            Self::Credentials { .. } => "Login Failed",
            Self::Parse { .. } => "Bad Response",
            Self::UnknownRole { .. } => "Access Denied",
        }
    }

    /// Credentials failure carrying the server's detail or the default message.
    #[must_use]
    pub fn credentials(detail: Option<String>) -> Self {
        Self::Credentials {
            message: detail.unwrap_or_else(|| DEFAULT_CREDENTIALS_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn endpoint_paths() {
        assert_eq!(
            AuthMode::Login.endpoint("https://api.quizapp.com"),
            "https://api.quizapp.com/auth/login"
        );
        assert_eq!(
            AuthMode::Signup.endpoint("http://localhost:8000"),
            "http://localhost:8000/api/auth/signup"
        );
    }

    #[test]
    fn failure_messages_are_distinct() {
        let messages = [
            AuthFailure::Network {
                message: "refused".to_string(),
            }
            .to_string(),
            AuthFailure::Endpoint.to_string(),
            AuthFailure::credentials(None).to_string(),
            AuthFailure::Parse {
                message: "eof".to_string(),
            }
            .to_string(),
            AuthFailure::UnknownRole {
                role: "root".to_string(),
            }
            .to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn credentials_failure_prefers_detail() {
        assert_eq!(
            AuthFailure::credentials(Some("Incorrect Secret".to_string())).to_string(),
            "Incorrect Secret"
        );
        assert_eq!(
            AuthFailure::credentials(None).to_string(),
            DEFAULT_CREDENTIALS_MESSAGE
        );
    }

    #[test]
    fn credentials_debug_redacts_secrets() {
        let creds = Credentials::new("cj", "https://a.io", "hunter22", "admin123");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("hunter22"));
        assert!(!debug.contains("admin123"));
        assert!(debug.contains("cj"));
    }
}
