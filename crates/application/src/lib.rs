//! Quizgen Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The session store and authenticator
//! - Use case orchestration
//! - Application-level error handling

pub mod auth;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use auth::{Authenticator, SessionState, SessionStore};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{
    FileSystem, FileSystemError, IdentityClient, IdentityRequest, IdentityResponse,
    SessionStorage, StorageError, TransportError,
};
pub use use_cases::{LaunchQuiz, LaunchQuizInput, ReportRetry};
