//! Quiz run state machine.
//!
//! A run walks the question bank linearly:
//! - answer the current question (once)
//! - advance to the next one, or finish after the last
//! - restart from the first question with a zero score

use crate::error::{DomainError, DomainResult};
use crate::quiz::{QuestionBank, QuizMode, QuizQuestion};

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The selected answer was correct.
    Correct,
    /// The selected answer was wrong.
    Wrong {
        /// Text of the correct answer.
        correct_answer: String,
    },
    /// The question was already answered, or the run is finished.
    Ignored,
}

/// Closing remark for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every answer was correct.
    Perfect,
    /// At least half correct.
    GoodEffort,
    /// Less than half correct.
    KeepPracticing,
}

impl Verdict {
    /// Message shown on the completion screen.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect score!",
            Self::GoodEffort => "Good effort! Keep learning.",
            Self::KeepPracticing => "Keep practicing, you'll improve!",
        }
    }
}

/// Progress through one quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRun {
    bank: QuestionBank,
    mode: QuizMode,
    current_index: usize,
    selected: Option<usize>,
    score: usize,
    finished: bool,
}

impl QuizRun {
    /// Starts a run at the first question.
    #[must_use]
    pub const fn new(bank: QuestionBank, mode: QuizMode) -> Self {
        Self {
            bank,
            mode,
            current_index: 0,
            selected: None,
            score: 0,
            finished: false,
        }
    }

    /// The mode this run was started in.
    #[must_use]
    pub const fn mode(&self) -> QuizMode {
        self.mode
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of questions in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bank.len()
    }

    /// Always false; runs are built from non-empty banks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }

    /// Correct answers so far.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// The answer picked for the current question, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// True once the last question has been answered and advanced past.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// The question currently shown.
    #[must_use]
    pub fn current_question(&self) -> &QuizQuestion {
        &self.bank.questions()[self.current_index]
    }

    /// Percentage of questions already passed, `0..100`.
    #[must_use]
    pub fn progress_percent(&self) -> usize {
        self.current_index * 100 / self.len()
    }

    /// Answers the current question.
    ///
    /// # Errors
    ///
    /// Returns `AnswerOutOfRange` if `index` is not one of the current answers.
    pub fn answer(&mut self, index: usize) -> DomainResult<AnswerOutcome> {
        if self.finished || self.selected.is_some() {
            return Ok(AnswerOutcome::Ignored);
        }

        let question = self.current_question();
        if index >= question.answers.len() {
            return Err(DomainError::AnswerOutOfRange {
                index,
                count: question.answers.len(),
            });
        }

        let outcome = if index == question.correct_index {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Wrong {
                correct_answer: question.correct_answer().to_string(),
            }
        };

        self.selected = Some(index);
        if outcome == AnswerOutcome::Correct {
            self.score += 1;
        }
        Ok(outcome)
    }

    /// Moves past an answered question. Returns false if the current question
    /// has not been answered yet or the run is already finished.
    pub fn advance(&mut self) -> bool {
        if self.finished || self.selected.is_none() {
            return false;
        }

        if self.current_index + 1 < self.len() {
            self.current_index += 1;
            self.selected = None;
        } else {
            self.finished = true;
        }
        true
    }

    /// Resets to the first question with a zero score.
    pub const fn restart(&mut self) {
        self.current_index = 0;
        self.selected = None;
        self.score = 0;
        self.finished = false;
    }

    /// Closing remark based on the current score.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.score == self.len() {
            Verdict::Perfect
        } else if self.score * 2 >= self.len() {
            Verdict::GoodEffort
        } else {
            Verdict::KeepPracticing
        }
    }
}
