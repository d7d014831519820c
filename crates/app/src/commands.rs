//! Subcommand handlers.

use anyhow::bail;
use quizgen_application::IdentityClient;
use quizgen_domain::{AuthMode, QuizMode};
use quizgen_ui::{Route, Router, Terminal, UiContext, UiError, pages};

use crate::cli::Command;

/// Runs one subcommand to completion.
///
/// # Errors
///
/// Returns an error if the terminal fails, or if input ends before a login
/// or signup succeeds.
pub async fn execute<C, T>(command: Command, ctx: &UiContext<C>, term: &mut T) -> anyhow::Result<()>
where
    C: IdentityClient,
    T: Terminal,
{
    match command {
        Command::Run { path } => {
            let start = path.map_or_else(
                || Route::home(&ctx.store().current()),
                |p| Route::from_path(&p),
            );
            Router::new(ctx, term).run(start).await?;
        }
        Command::Login => authenticate(ctx, term, AuthMode::Login).await?,
        Command::Signup => authenticate(ctx, term, AuthMode::Signup).await?,
        Command::Logout => {
            ctx.store().clear().await;
            term.say("Logged out.");
        }
        Command::Status => status(ctx, term),
        Command::Play { trial } => {
            let mode = if trial {
                QuizMode::Trial
            } else {
                QuizMode::Standard
            };
            Router::new(ctx, term).run(Route::Quiz(mode)).await?;
        }
    }
    Ok(())
}

/// Shows the form until one exchange succeeds.
async fn authenticate<C, T>(ctx: &UiContext<C>, term: &mut T, mode: AuthMode) -> anyhow::Result<()>
where
    C: IdentityClient,
    T: Terminal,
{
    loop {
        match pages::auth_form(ctx, term, mode).await {
            Ok(Some(_)) => return Ok(()),
            Ok(None) => {}
            Err(UiError::InputClosed) => bail!("input closed before authentication completed"),
            Err(e) => return Err(e.into()),
        }
    }
}

fn status<C: IdentityClient, T: Terminal>(ctx: &UiContext<C>, term: &mut T) {
    match ctx.store().current().principal() {
        Some(principal) => term.say(&format!(
            "Logged in as {} [{}] at {}",
            principal.identity,
            principal.role.label(),
            principal.origin
        )),
        None => term.say("Not logged in."),
    }
}
