//! Quiz runner page.

use quizgen_application::{ApplicationError, IdentityClient, LaunchQuizInput};
use quizgen_domain::{AnswerOutcome, DifficultyFilters, MAX_ANSWERS, QuizMode, QuizRun};

use crate::context::UiContext;
use crate::error::UiResult;
use crate::router::Route;
use crate::terminal::Terminal;

const PROGRESS_WIDTH: usize = 20;

/// Letter shown for the answer at `index`. Banks never hold more than
/// [`MAX_ANSWERS`] answers per question.
fn letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|&i| usize::from(i) < MAX_ANSWERS)
        .map_or('?', |i| char::from(b'A' + i))
}

/// Parses an answer letter, case-insensitively.
fn parse_letter(input: &str, count: usize) -> Option<usize> {
    let mut chars = input.trim().chars();
    let c = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !c.is_ascii_uppercase() {
        return None;
    }
    let index = (c as usize) - ('A' as usize);
    (index < count).then_some(index)
}

fn progress_bar(percent: usize) -> String {
    let filled = percent * PROGRESS_WIDTH / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    )
}

/// The quiz page: launches a run for `mode` and walks it to the end.
///
/// # Errors
///
/// Returns an error if the terminal fails or input ends.
pub async fn quiz<C, T>(
    ctx: &UiContext<C>,
    term: &mut T,
    mode: QuizMode,
    filters: DifficultyFilters,
) -> UiResult<Route>
where
    C: IdentityClient,
    T: Terminal,
{
    let mut run = match ctx.launcher().execute(LaunchQuizInput { mode, filters }) {
        Ok(run) => run,
        Err(ApplicationError::NotAuthenticated) => return Ok(Route::Landing),
        Err(e) => {
            term.say(&e.to_string());
            return Ok(Route::Select);
        }
    };
    let origin = ctx.store().current().origin().unwrap_or_default().to_string();

    loop {
        term.say(&format!("Connected to: {origin}"));
        while !run.is_finished() {
            ask(ctx, term, &mut run)?;
        }

        term.say("Quiz Complete!");
        term.say(&format!("{} / {}", run.score(), run.len()));
        term.say(run.verdict().message());
        term.say(&format!(
            "Results have been synchronized with the server at: {origin}"
        ));

        loop {
            match term.read_line("(r)etry or (b)ack: ")?.trim() {
                "r" | "R" => {
                    run.restart();
                    break;
                }
                "b" | "B" => return Ok(Route::Select),
                _ => {}
            }
        }
    }
}

/// Shows the current question, takes one answer, and advances.
fn ask<C, T>(ctx: &UiContext<C>, term: &mut T, run: &mut QuizRun) -> UiResult<()>
where
    C: IdentityClient,
    T: Terminal,
{
    let question = run.current_question().clone();
    term.say(&format!(
        "Question {} of {}    Score: {}",
        run.current_index() + 1,
        run.len(),
        run.score()
    ));
    term.say(&progress_bar(run.progress_percent()));
    if let Some(description) = &question.description {
        term.say(description);
    }
    if let Some(image) = &question.image {
        term.say(&format!("Image: {image}"));
    }
    term.say(&question.question);
    for (i, answer) in question.answers.iter().enumerate() {
        term.say(&format!("  {}) {answer}", letter(i)));
    }

    let last = letter(question.answers.len().saturating_sub(1));
    let index = loop {
        let typed = term.read_line(&format!("Answer (A-{last}): "))?;
        match parse_letter(&typed, question.answers.len()) {
            Some(index) => break index,
            None => term.say(&format!("Pick one of A-{last}.")),
        }
    };

    match run.answer(index) {
        Ok(AnswerOutcome::Correct) => term.say("Correct! Great job!"),
        Ok(AnswerOutcome::Wrong { correct_answer }) => {
            if let Err(e) = ctx.retry().execute(&question) {
                tracing::warn!(error = %e, "failed to report retry");
            }
            term.say(&format!("Wrong! The correct answer was: {correct_answer}"));
        }
        Ok(AnswerOutcome::Ignored) => {}
        Err(e) => term.say(&e.to_string()),
    }
    run.advance();
    Ok(())
}
