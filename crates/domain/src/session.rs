//! Session domain model.
//!
//! A session is either fully logged out or fully logged in. The four fields
//! of an authenticated session live together in [`Principal`], so a session
//! can never be partially populated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Authorization tier assigned by the identity service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, including difficulty filters.
    Admin,
    /// Free trial quizzes only.
    FreeTrial,
    /// Standard quizzes.
    Regular,
}

impl Role {
    /// All known roles.
    pub const ALL: [Self; 3] = [Self::Admin, Self::FreeTrial, Self::Regular];

    /// Returns the wire representation (`admin`, `free_trial`, `regular`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::FreeTrial => "free_trial",
            Self::Regular => "regular",
        }
    }

    /// Human-readable label, underscores replaced by spaces.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::FreeTrial => "free trial",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::UnknownRole(s.to_string()))
    }
}

/// An authenticated principal: everything a logged-in session carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Name the user authenticated with.
    pub identity: String,
    /// Authorization tier.
    pub role: Role,
    /// Opaque bearer token. Never inspected, only stored and forwarded.
    pub credential: String,
    /// Normalized backend origin the credential is valid against.
    pub origin: String,
}

impl Principal {
    /// Creates a new principal.
    #[must_use]
    pub fn new(
        identity: impl Into<String>,
        role: Role,
        credential: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            role,
            credential: credential.into(),
            origin: origin.into(),
        }
    }
}

/// The current session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// No authenticated principal.
    #[default]
    LoggedOut,
    /// An authenticated principal is present.
    LoggedIn(Principal),
}

impl Session {
    /// Returns true if a principal is present.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    /// Returns the principal, if logged in.
    #[must_use]
    pub const fn principal(&self) -> Option<&Principal> {
        match self {
            Self::LoggedIn(principal) => Some(principal),
            Self::LoggedOut => None,
        }
    }

    /// Authenticated user name.
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.principal().map(|p| p.identity.as_str())
    }

    /// Authorization tier.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.principal().map(|p| p.role)
    }

    /// Bearer credential.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.principal().map(|p| p.credential.as_str())
    }

    /// Backend origin.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.principal().map(|p| p.origin.as_str())
    }
}

impl From<Principal> for Session {
    fn from(principal: Principal) -> Self {
        Self::LoggedIn(principal)
    }
}

/// Strips exactly one trailing `/` from a backend origin.
///
/// No other URL validation happens here; a malformed host only fails once
/// the network call is made.
#[must_use]
pub fn normalize_origin(raw: &str) -> &str {
    raw.strip_suffix('/').unwrap_or(raw)
}
