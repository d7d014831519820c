//! Fallback page for unknown routes.

use quizgen_application::IdentityClient;

use crate::context::UiContext;
use crate::error::UiResult;
use crate::router::Route;
use crate::terminal::Terminal;

/// Shows the 404 page. Going back leads to selection when a credential
/// exists, otherwise to the login page.
///
/// # Errors
///
/// Returns an error if the terminal fails or input ends.
pub fn not_found<C, T>(ctx: &UiContext<C>, term: &mut T) -> UiResult<Route>
where
    C: IdentityClient,
    T: Terminal,
{
    term.say("404");
    term.say("You are lost");
    term.say("The page you're looking for doesn't exist.");
    term.read_line("Press Enter to go back ")?;

    Ok(if ctx.store().current().credential().is_some() {
        Route::Select
    } else {
        Route::Landing
    })
}
