//! Quiz domain types
//!
//! A quiz is a fixed, ordered list of multiple-choice questions walked one
//! index at a time.

mod question;
mod run;
mod selection;

pub use question::{MAX_ANSWERS, QuestionBank, QuizQuestion};
pub use run::{AnswerOutcome, QuizRun, Verdict};
pub use selection::{DifficultyFilters, QuizMode, Subject};
