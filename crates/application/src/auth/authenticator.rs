//! Authenticator: one login or signup attempt, one outcome.
//!
//! Each exchange moves through `Idle -> Pending -> {Committed, Rejected}`.
//! The session store's readiness flag is raised for the whole `Pending`
//! phase and only a `Committed` exchange touches the session.

use quizgen_domain::{
    AuthFailure, AuthMode, AuthSuccess, Credentials, Principal, Role, normalize_origin,
};
use serde::Serialize;

use super::grant::classify;
use super::session_store::SessionStore;
use crate::ports::{IdentityClient, IdentityRequest};

#[derive(Debug, Serialize)]
struct ExchangeBody<'a> {
    username: &'a str,
    password: &'a str,
    secret: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    salt: Option<&'a str>,
}

/// Performs authentication exchanges and commits successful ones.
pub struct Authenticator<C: IdentityClient> {
    client: C,
    store: SessionStore,
    salt: Option<String>,
}

impl<C: IdentityClient> Authenticator<C> {
    /// Creates an authenticator that commits into `store`.
    #[must_use]
    pub const fn new(client: C, store: SessionStore) -> Self {
        Self {
            client,
            store,
            salt: None,
        }
    }

    /// Sets the shared salt sent with login requests.
    #[must_use]
    pub fn with_salt(mut self, salt: Option<String>) -> Self {
        self.salt = salt;
        self
    }

    /// The identity client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// The store this authenticator commits into.
    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Logs in with an existing account.
    ///
    /// # Errors
    ///
    /// See [`Authenticator::authenticate`].
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSuccess, AuthFailure> {
        self.authenticate(AuthMode::Login, credentials).await
    }

    /// Registers a new account and logs it in.
    ///
    /// # Errors
    ///
    /// See [`Authenticator::authenticate`].
    pub async fn signup(&self, credentials: &Credentials) -> Result<AuthSuccess, AuthFailure> {
        self.authenticate(AuthMode::Signup, credentials).await
    }

    /// Runs one exchange against the identity service.
    ///
    /// On success the session store holds the new principal. On failure the
    /// store is untouched.
    ///
    /// # Errors
    ///
    /// - `Network` if the request never completed
    /// - `Endpoint` if the service answered 404
    /// - `Credentials` for any other rejection
    /// - `Parse` if a success body could not be read
    /// - `UnknownRole` if the granted role is not a known tier
    pub async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AuthSuccess, AuthFailure> {
        let _pending = self.store.begin_exchange();
        let origin = normalize_origin(&credentials.origin);

        tracing::info!(
            identity = %credentials.identity,
            origin = %origin,
            mode = ?mode,
            "authenticating"
        );

        let result = self.exchange(mode, origin, credentials).await;
        match &result {
            Ok(success) => tracing::info!(
                identity = %success.identity,
                role = %success.role,
                "authentication succeeded"
            ),
            Err(failure) => tracing::warn!(
                identity = %credentials.identity,
                error = %failure,
                "authentication failed"
            ),
        }
        result
    }

    async fn exchange(
        &self,
        mode: AuthMode,
        origin: &str,
        credentials: &Credentials,
    ) -> Result<AuthSuccess, AuthFailure> {
        let body = ExchangeBody {
            username: &credentials.identity,
            password: &credentials.password,
            secret: &credentials.secret,
            salt: match mode {
                AuthMode::Login => self.salt.as_deref(),
                AuthMode::Signup => None,
            },
        };
        let request = IdentityRequest {
            url: mode.endpoint(origin),
            body: serde_json::to_value(&body).map_err(|e| AuthFailure::Parse {
                message: e.to_string(),
            })?,
        };

        let response = self
            .client
            .post_json(&request)
            .await
            .map_err(|e| AuthFailure::Network {
                message: e.to_string(),
            })?;

        tracing::debug!(status = response.status, url = %request.url, "identity service responded");

        let grant = classify(&response)?;
        let role: Role = grant
            .role
            .parse()
            .map_err(|_| AuthFailure::UnknownRole { role: grant.role })?;

        self.store
            .commit(Principal::new(
                credentials.identity.as_str(),
                role,
                grant.access_token,
                origin,
            ))
            .await;

        Ok(AuthSuccess {
            identity: credentials.identity.clone(),
            role,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::auth::session_store::tests::FakeStorage;
    use crate::ports::{IdentityResponse, TransportError};
    use pretty_assertions::assert_eq;
    use quizgen_domain::{DEFAULT_CREDENTIALS_MESSAGE, Session};
    use std::sync::{Arc, Mutex};

    /// Identity client that replays one canned answer and records requests.
    struct StubClient {
        reply: Result<IdentityResponse, TransportError>,
        requests: Mutex<Vec<IdentityRequest>>,
        loading_seen: Mutex<Vec<bool>>,
        store: Mutex<Option<SessionStore>>,
    }

    impl StubClient {
        fn replying(status: u16, body: &str) -> Self {
            Self::with_reply(Ok(IdentityResponse::new(status, body)))
        }

        fn with_reply(reply: Result<IdentityResponse, TransportError>) -> Self {
            Self {
                reply,
                requests: Mutex::default(),
                loading_seen: Mutex::default(),
                store: Mutex::default(),
            }
        }
    }

    impl IdentityClient for &StubClient {
        async fn post_json(
            &self,
            request: &IdentityRequest,
        ) -> Result<IdentityResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            if let Some(store) = self.store.lock().unwrap().as_ref() {
                self.loading_seen.lock().unwrap().push(store.is_loading());
            }
            self.reply.clone()
        }
    }

    fn credentials(origin: &str) -> Credentials {
        Credentials::new("cj_pingol", origin, "password1", "admin123")
    }

    fn setup(client: &StubClient) -> (Authenticator<&StubClient>, Arc<FakeStorage>) {
        let storage = Arc::new(FakeStorage::default());
        let store = SessionStore::new(storage.clone());
        *client.store.lock().unwrap() = Some(store.clone());
        (Authenticator::new(client, store), storage)
    }

    #[tokio::test]
    async fn successful_login_commits_full_session() {
        let client = StubClient::replying(200, r#"{"access_token":"jwt-1","role":"admin"}"#);
        let (auth, storage) = setup(&client);
        assert!(!auth.store().is_loading());

        let success = auth.login(&credentials("https://api.quizapp.com/")).await.unwrap();

        assert_eq!(
            success,
            AuthSuccess {
                identity: "cj_pingol".to_string(),
                role: Role::Admin
            }
        );
        assert_eq!(
            auth.store().current(),
            Session::LoggedIn(Principal::new(
                "cj_pingol",
                Role::Admin,
                "jwt-1",
                "https://api.quizapp.com"
            ))
        );
        assert_eq!(storage.entries().len(), 4);
        assert_eq!(*client.loading_seen.lock().unwrap(), vec![true]);
        assert!(!auth.store().is_loading());
    }

    #[tokio::test]
    async fn login_request_shape() {
        let client = StubClient::replying(200, r#"{"access_token":"jwt-1","role":"regular"}"#);
        let (auth, _) = setup(&client);
        let auth = auth.with_salt(Some("pepper".to_string()));

        auth.login(&credentials("http://localhost:8000/")).await.unwrap();

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://localhost:8000/auth/login");
        assert_eq!(
            requests[0].body,
            serde_json::json!({
                "username": "cj_pingol",
                "password": "password1",
                "secret": "admin123",
                "salt": "pepper"
            })
        );
    }

    #[tokio::test]
    async fn signup_request_has_no_salt() {
        let client = StubClient::replying(
            200,
            r#"{"access_token":"jwt-2","token_type":"bearer","user":{"username":"cj_pingol","role":"free_trial"}}"#,
        );
        let (auth, _) = setup(&client);
        let auth = auth.with_salt(Some("pepper".to_string()));

        let success = auth.signup(&credentials("http://localhost:8000")).await.unwrap();

        assert_eq!(success.role, Role::FreeTrial);
        let requests = client.requests.lock().unwrap();
        assert_eq!(requests[0].url, "http://localhost:8000/api/auth/signup");
        assert!(requests[0].body.get("salt").is_none());
    }

    #[tokio::test]
    async fn not_found_is_endpoint_error_and_leaves_store_alone() {
        let client = StubClient::replying(404, r#"{"detail":"Incorrect Secret"}"#);
        let (auth, storage) = setup(&client);

        let failure = auth.login(&credentials("https://wrong.example")).await.unwrap_err();

        assert_eq!(failure, AuthFailure::Endpoint);
        assert_eq!(auth.store().current(), Session::LoggedOut);
        assert!(storage.entries().is_empty());
        assert!(!auth.store().is_loading());
    }

    #[tokio::test]
    async fn rejection_carries_server_detail() {
        let client = StubClient::replying(401, r#"{"detail":"Incorrect Secret"}"#);
        let (auth, _) = setup(&client);

        let failure = auth.signup(&credentials("http://localhost:8000")).await.unwrap_err();

        assert_eq!(
            failure,
            AuthFailure::Credentials {
                message: "Incorrect Secret".to_string()
            }
        );
        assert_eq!(auth.store().current(), Session::LoggedOut);
    }

    #[tokio::test]
    async fn rejection_without_detail_uses_default_message() {
        let client = StubClient::replying(401, "{}");
        let (auth, _) = setup(&client);

        let failure = auth.login(&credentials("http://localhost:8000")).await.unwrap_err();

        assert_eq!(failure.to_string(), DEFAULT_CREDENTIALS_MESSAGE);
    }

    #[tokio::test]
    async fn transport_failure_is_network_error() {
        let client = StubClient::with_reply(Err(TransportError::ConnectionFailed(
            "connection refused".to_string(),
        )));
        let (auth, _) = setup(&client);

        let failure = auth.login(&credentials("http://localhost:1")).await.unwrap_err();

        assert!(matches!(failure, AuthFailure::Network { .. }));
        assert!(!auth.store().is_loading());
    }

    #[tokio::test]
    async fn unknown_role_fails_closed() {
        let client = StubClient::replying(200, r#"{"access_token":"jwt","role":"free-trial"}"#);
        let (auth, storage) = setup(&client);

        let failure = auth.login(&credentials("http://localhost:8000")).await.unwrap_err();

        assert_eq!(
            failure,
            AuthFailure::UnknownRole {
                role: "free-trial".to_string()
            }
        );
        assert_eq!(auth.store().current(), Session::LoggedOut);
        assert!(storage.entries().is_empty());
    }

    #[tokio::test]
    async fn garbage_success_body_is_parse_error() {
        let client = StubClient::replying(200, "<html>oops</html>");
        let (auth, _) = setup(&client);

        let failure = auth.login(&credentials("http://localhost:8000")).await.unwrap_err();

        assert!(matches!(failure, AuthFailure::Parse { .. }));
        assert_eq!(auth.store().current(), Session::LoggedOut);
    }
}
