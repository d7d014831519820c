//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The role string is not one of the known tiers.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// The selected answer does not exist on the current question.
    #[error("answer index {index} out of range (question has {count} answers)")]
    AnswerOutOfRange {
        /// The index that was selected.
        index: usize,
        /// Number of answers on the question.
        count: usize,
    },

    /// A question bank must hold at least one question.
    #[error("question bank is empty")]
    EmptyQuestionBank,

    /// A question's correct index points past its answers.
    #[error("invalid question: {0}")]
    InvalidQuestion(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
