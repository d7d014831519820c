//! Text pages.
//!
//! Each page returns the [`Route`](crate::Route) to show next.

mod landing;
mod not_found;
mod quiz;
mod selection;

pub use landing::{auth_form, landing};
pub use not_found::not_found;
pub use quiz::quiz;
pub use selection::selection;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use quizgen_application::{
        Authenticator, IdentityClient, IdentityRequest, IdentityResponse, SessionStore,
        TransportError,
    };
    use quizgen_domain::{AuthMode, Principal, QuestionBank, QuizMode, Role, Session};
    use quizgen_infrastructure::MemorySessionStorage;

    use super::auth_form;
    use crate::{Route, Router, ScriptedTerminal, UiContext};

    struct StubClient {
        replies: Mutex<VecDeque<IdentityResponse>>,
        requests: Mutex<Vec<IdentityRequest>>,
    }

    impl StubClient {
        fn new(replies: &[(u16, &str)]) -> Self {
            Self {
                replies: Mutex::new(
                    replies
                        .iter()
                        .map(|(status, body)| IdentityResponse::new(*status, *body))
                        .collect(),
                ),
                requests: Mutex::default(),
            }
        }
    }

    impl IdentityClient for StubClient {
        async fn post_json(
            &self,
            request: &IdentityRequest,
        ) -> Result<IdentityResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| TransportError::Other("no reply scripted".to_string()))
        }
    }

    async fn context(replies: &[(u16, &str)], role: Option<Role>) -> UiContext<StubClient> {
        let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));
        if let Some(role) = role {
            store
                .commit(Principal::new("cj", role, "tok", "http://localhost:8000"))
                .await;
        }
        UiContext::new(
            Authenticator::new(StubClient::new(replies), store),
            QuestionBank::builtin(),
        )
    }

    async fn run(ctx: &UiContext<StubClient>, start: Route, input: &[&str]) -> ScriptedTerminal {
        let mut term = ScriptedTerminal::new(input.iter().copied());
        Router::new(ctx, &mut term).run(start).await.unwrap();
        term
    }

    #[tokio::test]
    async fn login_failure_then_success() {
        let ctx = context(
            &[
                (401, r#"{"detail":"Incorrect Secret"}"#),
                (200, r#"{"access_token":"jwt","role":"regular"}"#),
            ],
            None,
        )
        .await;

        let term = run(
            &ctx,
            Route::Landing,
            &[
                "cj", "password1", "http://localhost:8000", "wrong", // first attempt
                "cj", "password1", "http://localhost:8000/", "right", // second attempt
                "q",
            ],
        )
        .await;

        let transcript = term.transcript();
        assert!(transcript.contains("Login Failed: Incorrect Secret"));
        assert!(transcript.contains("Welcome! Logged in as cj"));
        assert!(transcript.contains("Hi, CJ [regular]"));
        assert_eq!(
            ctx.store().current().origin(),
            Some("http://localhost:8000")
        );
        assert_eq!(term.remaining(), 0);
    }

    #[tokio::test]
    async fn default_origin_is_used_for_blank_input() {
        let ctx = context(&[(200, r#"{"access_token":"jwt","role":"admin"}"#)], None)
            .await
            .with_default_origin(Some("https://api.quizapp.com".to_string()));

        let term = run(&ctx, Route::Landing, &["cj", "password1", "", "s3cret", "q"]).await;

        assert!(
            term.output()
                .contains(&"Backend URL [https://api.quizapp.com]: ".to_string())
        );
        let requests = ctx.authenticator_requests();
        assert_eq!(requests[0].url, "https://api.quizapp.com/auth/login");
    }

    #[tokio::test]
    async fn guarded_route_redirects_to_login() {
        let ctx = context(&[], None).await;

        let term = run(&ctx, Route::Select, &[]).await;

        let transcript = term.transcript();
        assert!(transcript.contains("Enter your credentials to get started"));
        assert!(!transcript.contains("Hi,"));
    }

    #[tokio::test]
    async fn locked_option_then_logout() {
        let ctx = context(&[], Some(Role::FreeTrial)).await;

        let term = run(&ctx, Route::Select, &["2", "3", "4"]).await;

        let transcript = term.transcript();
        assert!(transcript.contains("Hi, CJ [free trial]"));
        assert!(transcript.contains("  2) Start Quiz [locked]"));
        assert!(transcript.contains("That option is not available for free trial accounts."));
        assert!(transcript.contains("Difficulty selection is restricted to Admin accounts."));
        assert!(transcript.contains("Logged out."));
        assert_eq!(ctx.store().current(), Session::LoggedOut);
    }

    #[tokio::test]
    async fn admin_sets_filters_and_walks_quiz() {
        let ctx = context(&[], Some(Role::Admin)).await;

        let term = run(
            &ctx,
            Route::Select,
            &[
                "3", "biology", "", "Physics", // filters
                "2", // start quiz
                "Z", "b", "C", "A", "A", "C", // answers, one invalid, one wrong
                "b", "q",
            ],
        )
        .await;

        let transcript = term.transcript();
        assert!(transcript.contains("Difficulty (Easy: Biology, Medium: -, Hard: Physics)"));
        assert!(transcript.contains("Connected to: http://localhost:8000"));
        assert!(transcript.contains("Question 1 of 5    Score: 0"));
        assert!(transcript.contains("Pick one of A-D."));
        assert!(transcript.contains("Wrong! The correct answer was: Mitochondria"));
        assert!(transcript.contains("4 / 5"));
        assert!(transcript.contains("Good effort! Keep learning."));
        assert_eq!(term.remaining(), 0);
    }

    #[tokio::test]
    async fn retry_restarts_the_run() {
        let ctx = context(&[], Some(Role::Regular)).await;
        let perfect = ["B", "C", "D", "A", "C"];
        let mut input: Vec<&str> = perfect.to_vec();
        input.push("r");
        input.extend(["A", "A", "A", "B", "A"]);
        input.extend(["b", "q"]);

        let term = run(&ctx, Route::Quiz(QuizMode::Standard), &input).await;

        let transcript = term.transcript();
        assert!(transcript.contains("5 / 5"));
        assert!(transcript.contains("Perfect score!"));
        assert!(transcript.contains("0 / 5"));
        assert!(transcript.contains("Keep practicing, you'll improve!"));
    }

    #[tokio::test]
    async fn denied_mode_returns_to_selection() {
        let ctx = context(&[], Some(Role::Regular)).await;

        let term = run(&ctx, Route::Quiz(QuizMode::Trial), &["q"]).await;

        let transcript = term.transcript();
        assert!(transcript.contains("Free Trial is not available for the regular role"));
        assert!(transcript.contains("Hi, CJ [regular]"));
    }

    #[tokio::test]
    async fn not_found_goes_back_by_credential() {
        let logged_in = context(&[], Some(Role::Regular)).await;
        let term = run(&logged_in, Route::NotFound, &["", "q"]).await;
        assert!(term.transcript().contains("You are lost"));
        assert!(term.transcript().contains("Hi, CJ [regular]"));

        let logged_out = context(&[], None).await;
        let term = run(&logged_out, Route::NotFound, &[""]).await;
        assert!(term.transcript().contains("Enter your credentials to get started"));
    }

    #[tokio::test]
    async fn signup_rejects_invalid_input_locally() {
        let ctx = context(&[], None).await;

        let mut term = ScriptedTerminal::new(["cj", "password1"]);
        let result = auth_form(&ctx, &mut term, AuthMode::Signup).await.unwrap();
        assert!(result.is_none());
        assert!(term.transcript().contains("Username must be 3 to 72"));

        let mut term = ScriptedTerminal::new(["cj_pingol", "PASSWORD1"]);
        let result = auth_form(&ctx, &mut term, AuthMode::Signup).await.unwrap();
        assert!(result.is_none());
        assert!(term.transcript().contains("Password must be at least 8"));

        assert!(ctx.authenticator_requests().is_empty());
    }

    #[tokio::test]
    async fn filters_are_dropped_when_the_session_changes() {
        let ctx = context(
            &[(200, r#"{"access_token":"jwt","role":"regular"}"#)],
            Some(Role::Admin),
        )
        .await;

        let term = run(
            &ctx,
            Route::Select,
            &[
                "3", "Biology", "", "", // admin filters
                "4", // logout
                "cj", "password1", "http://localhost:8000", "s3cret",
                "2", // start quiz as regular
                "B", "C", "D", "A", "C",
                "b", "q",
            ],
        )
        .await;

        let transcript = term.transcript();
        assert!(transcript.contains("Difficulty (Easy: Biology, Medium: -, Hard: -)"));
        assert!(transcript.contains("Hi, CJ [regular]"));
        assert!(!transcript.contains("Difficulty selection is not available"));
        assert!(transcript.contains("5 / 5"));
        assert_eq!(term.remaining(), 0);
    }

    #[tokio::test]
    async fn password_and_secret_are_sent_as_typed() {
        let ctx = context(&[(200, r#"{"access_token":"jwt","role":"regular"}"#)], None).await;

        let mut term = ScriptedTerminal::new([" cj ", "  password1 ", "http://x", " s3cret "]);
        let result = auth_form(&ctx, &mut term, AuthMode::Login).await.unwrap();
        assert!(result.is_some());

        let requests = ctx.authenticator_requests();
        assert_eq!(requests[0].body["username"], "cj");
        assert_eq!(requests[0].body["password"], "  password1 ");
        assert_eq!(requests[0].body["secret"], " s3cret ");
    }

    impl UiContext<StubClient> {
        fn authenticator_requests(&self) -> Vec<IdentityRequest> {
            self.authenticator().client().requests.lock().unwrap().clone()
        }
    }
}
