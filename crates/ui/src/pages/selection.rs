//! Quiz selection page.

use quizgen_application::IdentityClient;
use quizgen_domain::{DifficultyFilters, Permissions, QuizMode, Subject};

use crate::context::UiContext;
use crate::error::UiResult;
use crate::router::Route;
use crate::terminal::Terminal;

fn lock(allowed: bool) -> &'static str {
    if allowed { "" } else { " [locked]" }
}

fn describe(subject: Option<Subject>) -> &'static str {
    subject.map_or("-", Subject::name)
}

/// The selection page: pick a mode, set filters, or log out.
///
/// # Errors
///
/// Returns an error if the terminal fails or input ends.
pub async fn selection<C, T>(
    ctx: &UiContext<C>,
    term: &mut T,
    filters: &mut DifficultyFilters,
) -> UiResult<Route>
where
    C: IdentityClient,
    T: Terminal,
{
    let session = ctx.store().current();
    let Some(principal) = session.principal() else {
        return Ok(Route::Landing);
    };
    let permissions = Permissions::for_role(principal.role);

    term.say(&format!(
        "Hi, {} [{}]",
        principal.identity.to_uppercase(),
        principal.role.label()
    ));

    loop {
        term.say(&format!("  1) Free Trial{}", lock(permissions.can_free_trial)));
        term.say(&format!("  2) Start Quiz{}", lock(permissions.can_start_quiz)));
        term.say(&format!(
            "  3) Difficulty (Easy: {}, Medium: {}, Hard: {}){}",
            describe(filters.easy),
            describe(filters.medium),
            describe(filters.hard),
            lock(permissions.can_access_filters)
        ));
        term.say("  4) Logout");
        term.say("  q) Quit");
        if !permissions.can_access_filters {
            term.say("Difficulty selection is restricted to Admin accounts.");
        }

        match term.read_line("Choose: ")?.trim() {
            "1" if permissions.can_free_trial => {
                term.say("Free Trial: entering trial mode...");
                return Ok(Route::Quiz(QuizMode::Trial));
            }
            "2" if permissions.can_start_quiz => {
                term.say("Starting Quiz! Loading your customized questions...");
                return Ok(Route::Quiz(QuizMode::Standard));
            }
            "3" if permissions.can_access_filters => pick_filters(term, filters)?,
            "1" | "2" | "3" => {
                term.say(&format!(
                    "That option is not available for {} accounts.",
                    principal.role.label()
                ));
            }
            "4" => {
                ctx.store().clear().await;
                term.say("Logged out.");
                return Ok(Route::Landing);
            }
            "q" | "Q" => return Ok(Route::Exit),
            other => term.say(&format!("Unknown option: {other}")),
        }
    }
}

fn pick_filters<T: Terminal>(term: &mut T, filters: &mut DifficultyFilters) -> UiResult<()> {
    let names: Vec<&str> = Subject::ALL.iter().map(|s| s.name()).collect();
    term.say(&format!("Subjects: {} (blank for none)", names.join(", ")));

    for (label, slot) in [
        ("Easy", &mut filters.easy),
        ("Medium", &mut filters.medium),
        ("Hard", &mut filters.hard),
    ] {
        loop {
            let typed = term.read_line(&format!("{label}: "))?;
            if typed.trim().is_empty() {
                *slot = None;
                break;
            }
            if let Some(subject) = Subject::from_name(&typed) {
                *slot = Some(subject);
                break;
            }
            term.say(&format!("Unknown subject: {}", typed.trim()));
        }
    }
    Ok(())
}
