//! Quizgen Domain - Core business types
//!
//! This crate defines the domain model for the Quizgen quiz client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod permissions;
pub mod quiz;
pub mod session;
pub mod validation;

pub use auth::{
    AuthFailure, AuthGrant, AuthMode, AuthSuccess, Credentials, DEFAULT_CREDENTIALS_MESSAGE,
};
pub use error::{DomainError, DomainResult};
pub use permissions::Permissions;
pub use quiz::{
    AnswerOutcome, DifficultyFilters, MAX_ANSWERS, QuestionBank, QuizMode, QuizQuestion, QuizRun,
    Subject, Verdict,
};
pub use session::{Principal, Role, Session, normalize_origin};
pub use validation::{is_valid_password, is_valid_username};
