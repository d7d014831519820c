//! Application error types

use quizgen_domain::Role;
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The operation needs a logged-in session.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The session's role does not grant the requested feature.
    #[error("{feature} is not available for the {} role", role.label())]
    AccessDenied {
        /// The feature that was refused.
        feature: &'static str,
        /// The role that asked for it.
        role: Role,
    },

    /// A retry report could not be encoded.
    #[error("failed to encode retry report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
