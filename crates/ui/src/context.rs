//! Shared page context.

use quizgen_application::{
    Authenticator, IdentityClient, LaunchQuiz, ReportRetry, SessionStore,
};
use quizgen_domain::QuestionBank;

/// Everything a page needs: the authenticator, the quiz use cases and the
/// default backend origin offered on the login form.
pub struct UiContext<C: IdentityClient> {
    authenticator: Authenticator<C>,
    launcher: LaunchQuiz,
    retry: ReportRetry,
    default_origin: Option<String>,
}

impl<C: IdentityClient> UiContext<C> {
    /// Builds the context around an authenticator and a question bank.
    #[must_use]
    pub fn new(authenticator: Authenticator<C>, bank: QuestionBank) -> Self {
        let store = authenticator.store().clone();
        Self {
            launcher: LaunchQuiz::new(store.clone(), bank),
            retry: ReportRetry::new(store),
            authenticator,
            default_origin: None,
        }
    }

    /// Sets the origin offered when the backend URL prompt is left blank.
    #[must_use]
    pub fn with_default_origin(mut self, origin: Option<String>) -> Self {
        self.default_origin = origin;
        self
    }

    /// The session store.
    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        self.authenticator.store()
    }

    /// The authenticator.
    #[must_use]
    pub const fn authenticator(&self) -> &Authenticator<C> {
        &self.authenticator
    }

    /// The quiz launcher.
    #[must_use]
    pub const fn launcher(&self) -> &LaunchQuiz {
        &self.launcher
    }

    /// The wrong-answer reporter.
    #[must_use]
    pub const fn retry(&self) -> &ReportRetry {
        &self.retry
    }

    /// Default backend origin, if configured.
    #[must_use]
    pub fn default_origin(&self) -> Option<&str> {
        self.default_origin.as_deref()
    }
}
