//! Report retry use case.
//!
//! Wrong answers are reported for review as a `POST /retry` event.

use quizgen_domain::QuizQuestion;

use crate::auth::SessionStore;
use crate::error::ApplicationResult;

/// Use case for reporting a wrongly answered question.
pub struct ReportRetry {
    store: SessionStore,
}

impl ReportRetry {
    /// Creates a new `ReportRetry` use case.
    #[must_use]
    pub const fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Records `question` for retry and returns the JSON payload that was reported.
    ///
    /// The backend has no `/retry` endpoint, so the event is written to the
    /// log under the session's origin and identity instead of being sent.
    ///
    /// # Errors
    ///
    /// Returns `Report` if the question cannot be encoded as JSON.
    pub fn execute(&self, question: &QuizQuestion) -> ApplicationResult<String> {
        let payload = serde_json::to_string(question)?;
        let session = self.store.current();
        tracing::info!(
            origin = session.origin().unwrap_or("-"),
            identity = session.identity().unwrap_or("-"),
            payload = %payload,
            "POST /retry"
        );
        Ok(payload)
    }
}
