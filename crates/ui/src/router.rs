//! Page routing.
//!
//! `Select` and `Quiz` need a session; without one they send the user to
//! `Landing`. The router watches the session store and re-applies the guard
//! every time a route is entered, so a logout anywhere lands on the login
//! page. Difficulty filters belong to the session that chose them and are
//! reset whenever the session changes.

use quizgen_application::{IdentityClient, SessionState};
use quizgen_domain::{DifficultyFilters, QuizMode, Session};
use tokio::sync::watch;

use crate::context::UiContext;
use crate::error::{UiError, UiResult};
use crate::pages;
use crate::terminal::Terminal;

/// A page the router can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Login form, `/`.
    Landing,
    /// Quiz selection, `/select`.
    Select,
    /// Quiz runner, `/quiz` or `/quiz?mode=trial`.
    Quiz(QuizMode),
    /// Fallback for unknown paths.
    NotFound,
    /// Leave the application.
    Exit,
}

impl Route {
    /// Maps a path to a route. Unknown paths become `NotFound`.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path.trim() {
            "" | "/" => Self::Landing,
            "/select" => Self::Select,
            "/quiz" => Self::Quiz(QuizMode::Standard),
            "/quiz?mode=trial" => Self::Quiz(QuizMode::Trial),
            _ => Self::NotFound,
        }
    }

    /// True for routes that need a session.
    #[must_use]
    pub const fn is_guarded(self) -> bool {
        matches!(self, Self::Select | Self::Quiz(_))
    }

    /// Applies the session guard.
    #[must_use]
    pub const fn guard(self, session: &Session) -> Self {
        if self.is_guarded() && !session.is_logged_in() {
            Self::Landing
        } else {
            self
        }
    }

    /// Where the application starts for a session.
    #[must_use]
    pub const fn home(session: &Session) -> Self {
        if session.is_logged_in() {
            Self::Select
        } else {
            Self::Landing
        }
    }
}

/// Drives pages until one returns [`Route::Exit`] or input ends.
pub struct Router<'a, C: IdentityClient, T: Terminal> {
    ctx: &'a UiContext<C>,
    term: &'a mut T,
    session: watch::Receiver<SessionState>,
    filters: DifficultyFilters,
}

impl<'a, C: IdentityClient, T: Terminal> Router<'a, C, T> {
    /// Creates a router over a context and terminal.
    pub fn new(ctx: &'a UiContext<C>, term: &'a mut T) -> Self {
        Self {
            ctx,
            term,
            session: ctx.store().subscribe(),
            filters: DifficultyFilters::default(),
        }
    }

    /// Runs from `start` until exit. End of input is a normal exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub async fn run(&mut self, start: Route) -> UiResult<()> {
        let mut route = start;
        loop {
            let session = self.observe_session();
            let guarded = route.guard(&session);
            if guarded != route {
                tracing::debug!(from = ?route, to = ?guarded, "redirecting");
            }

            let next = match guarded {
                Route::Exit => return Ok(()),
                Route::Landing => pages::landing(self.ctx, self.term).await,
                Route::Select => pages::selection(self.ctx, self.term, &mut self.filters).await,
                Route::Quiz(mode) => pages::quiz(self.ctx, self.term, mode, self.filters).await,
                Route::NotFound => pages::not_found(self.ctx, self.term),
            };

            route = match next {
                Ok(next) => next,
                Err(UiError::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            };
        }
    }

    /// Reads the latest session, dropping filters if it changed since the
    /// last page.
    fn observe_session(&mut self) -> Session {
        let changed = self.session.has_changed().unwrap_or(false);
        let session = self.session.borrow_and_update().session.clone();
        if changed && self.filters != DifficultyFilters::default() {
            tracing::debug!("session changed, clearing difficulty filters");
            self.filters = DifficultyFilters::default();
        }
        session
    }
}
