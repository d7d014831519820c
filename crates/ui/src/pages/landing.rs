//! Login and signup form.

use quizgen_application::IdentityClient;
use quizgen_domain::{
    AuthMode, AuthSuccess, Credentials, is_valid_password, is_valid_username,
};

use crate::context::UiContext;
use crate::error::UiResult;
use crate::router::Route;
use crate::terminal::{Terminal, read_required};

const USERNAME_RULE: &str = "Username must be 3 to 72 letters, digits or underscores.";
const PASSWORD_RULE: &str =
    "Password must be at least 8 characters with a lowercase letter and a digit.";

/// The login page. Success goes to selection, failure shows the form again.
///
/// # Errors
///
/// Returns an error if the terminal fails or input ends.
pub async fn landing<C, T>(ctx: &UiContext<C>, term: &mut T) -> UiResult<Route>
where
    C: IdentityClient,
    T: Terminal,
{
    Ok(match auth_form(ctx, term, AuthMode::Login).await? {
        Some(_) => Route::Select,
        None => Route::Landing,
    })
}

/// Shows the credential form once and runs one exchange.
///
/// Returns `None` after printing why the attempt failed. Signup checks the
/// username and password locally before anything is sent.
///
/// # Errors
///
/// Returns an error if the terminal fails or input ends.
pub async fn auth_form<C, T>(
    ctx: &UiContext<C>,
    term: &mut T,
    mode: AuthMode,
) -> UiResult<Option<AuthSuccess>>
where
    C: IdentityClient,
    T: Terminal,
{
    term.say("Quiz Generator");
    term.say(match mode {
        AuthMode::Login => "Enter your credentials to get started",
        AuthMode::Signup => "Create an account",
    });

    let identity = read_required(term, "Username: ", false)?;
    let password = read_required(term, "Password: ", true)?;

    if mode == AuthMode::Signup {
        if !is_valid_username(&identity) {
            term.say(USERNAME_RULE);
            return Ok(None);
        }
        if !is_valid_password(&password) {
            term.say(PASSWORD_RULE);
            return Ok(None);
        }
    }

    let origin = match ctx.default_origin() {
        Some(default) => {
            let typed = term.read_line(&format!("Backend URL [{default}]: "))?;
            let typed = typed.trim();
            if typed.is_empty() {
                default.to_string()
            } else {
                typed.to_string()
            }
        }
        None => read_required(term, "Backend URL: ", false)?,
    };
    let secret = read_required(term, "Secret: ", true)?;

    let credentials = Credentials::new(identity, origin, password, secret);
    term.say(match mode {
        AuthMode::Login => "Logging in...",
        AuthMode::Signup => "Signing up...",
    });

    match ctx.authenticator().authenticate(mode, &credentials).await {
        Ok(success) => {
            term.say(&format!("Welcome! Logged in as {}", success.identity));
            Ok(Some(success))
        }
        Err(failure) => {
            term.say(&format!("{}: {failure}", failure.title()));
            Ok(None)
        }
    }
}
