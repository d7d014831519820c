//! Launch quiz use case.

use quizgen_domain::{DifficultyFilters, Permissions, QuestionBank, QuizMode, QuizRun};

use crate::auth::SessionStore;
use crate::error::{ApplicationError, ApplicationResult};

/// Input for starting a quiz from the selection screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchQuizInput {
    /// Standard or trial.
    pub mode: QuizMode,
    /// Difficulty subjects. Must be empty unless the role may use filters.
    pub filters: DifficultyFilters,
}

/// Use case for starting a quiz run, gated on the session's role.
pub struct LaunchQuiz {
    store: SessionStore,
    bank: QuestionBank,
}

impl LaunchQuiz {
    /// Creates a new `LaunchQuiz` use case over a question bank.
    #[must_use]
    pub const fn new(store: SessionStore, bank: QuestionBank) -> Self {
        Self { store, bank }
    }

    /// Starts a run if the current session may use the requested mode.
    ///
    /// # Errors
    /// - `NotAuthenticated` if nobody is logged in
    /// - `AccessDenied` if the role does not allow the mode or the filters
    pub fn execute(&self, input: LaunchQuizInput) -> ApplicationResult<QuizRun> {
        let role = self
            .store
            .current()
            .role()
            .ok_or(ApplicationError::NotAuthenticated)?;
        let permissions = Permissions::for_role(role);

        let (allowed, feature) = match input.mode {
            QuizMode::Standard => (permissions.can_start_quiz, "Start Quiz"),
            QuizMode::Trial => (permissions.can_free_trial, "Free Trial"),
        };
        if !allowed {
            return Err(ApplicationError::AccessDenied { feature, role });
        }

        if !input.filters.is_empty() && !permissions.can_access_filters {
            return Err(ApplicationError::AccessDenied {
                feature: "Difficulty selection",
                role,
            });
        }

        tracing::info!(mode = ?input.mode, role = %role, filters = ?input.filters, "starting quiz");
        Ok(QuizRun::new(self.bank.clone(), input.mode))
    }
}
