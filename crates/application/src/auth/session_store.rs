//! Session store: the single owner of the current session.
//!
//! The store holds the in-memory session in a `watch` channel so consumers
//! can read a snapshot at any time or subscribe to changes. Every mutation is
//! mirrored into durable [`SessionStorage`] under four plain string keys.
//! Storage failures are logged and never undo the in-memory change.

use std::collections::BTreeMap;
use std::sync::Arc;

use quizgen_domain::{Principal, Role, Session};
use tokio::sync::watch;

use crate::ports::SessionStorage;

/// Storage key for the user name.
pub const USER_KEY: &str = "user";
/// Storage key for the role.
pub const ROLE_KEY: &str = "role";
/// Storage key for the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the backend origin.
pub const BACKEND_URL_KEY: &str = "backend_url";
/// Every key the store writes.
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, ROLE_KEY, USER_KEY, BACKEND_URL_KEY];

/// Observable state of the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// The current session.
    pub session: Session,
    /// Number of authentication exchanges in flight.
    pub in_flight: usize,
}

impl SessionState {
    /// Readiness flag: true while any exchange is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

struct Inner {
    state: watch::Sender<SessionState>,
    storage: Arc<dyn SessionStorage>,
}

/// Cloneable handle to the session store.
///
/// Create one at startup with [`SessionStore::hydrate`] and pass clones to
/// every component that needs the session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.inner.state.borrow())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Creates a logged-out store backed by `storage`, without reading it.
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_session(storage, Session::LoggedOut)
    }

    fn with_session(storage: Arc<dyn SessionStorage>, session: Session) -> Self {
        let (state, _) = watch::channel(SessionState {
            session,
            in_flight: 0,
        });
        Self {
            inner: Arc::new(Inner { state, storage }),
        }
    }

    /// Creates a store seeded from one snapshot of durable storage.
    ///
    /// A stored record becomes a session only if all four keys are present
    /// and the role is known. Anything else starts logged out, and the stale
    /// keys are removed.
    pub async fn hydrate(storage: Arc<dyn SessionStorage>) -> Self {
        let entries = match storage.snapshot().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored session, starting logged out");
                BTreeMap::new()
            }
        };

        let session = session_from_entries(&entries);
        let stale = !session.is_logged_in() && SESSION_KEYS.iter().any(|k| entries.contains_key(*k));

        let store = Self::with_session(storage, session);
        if stale {
            store.remove_stored_keys().await;
        }
        if let Some(principal) = store.current().principal() {
            tracing::info!(
                identity = %principal.identity,
                role = %principal.role,
                origin = %principal.origin,
                "restored session"
            );
        }
        store
    }

    /// Returns the in-memory session. Never performs I/O.
    #[must_use]
    pub fn current(&self) -> Session {
        self.inner.state.borrow().session.clone()
    }

    /// Returns true while an authentication exchange is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading()
    }

    /// Subscribes to session and readiness changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Replaces the whole session with `principal` and mirrors it to storage.
    pub async fn commit(&self, principal: Principal) {
        let entries = [
            (USER_KEY, principal.identity.clone()),
            (ROLE_KEY, principal.role.as_str().to_string()),
            (TOKEN_KEY, principal.credential.clone()),
            (BACKEND_URL_KEY, principal.origin.clone()),
        ];

        self.inner
            .state
            .send_modify(|state| state.session = Session::LoggedIn(principal));

        let items: Vec<(&str, &str)> = entries.iter().map(|(k, v)| (*k, v.as_str())).collect();
        if let Err(e) = self.inner.storage.set_items(&items).await {
            tracing::warn!(error = %e, "failed to persist session");
        }
    }

    /// Logs out: resets the session in memory and removes every stored key.
    ///
    /// Calling this on a logged-out store is a no-op apart from the storage cleanup.
    pub async fn clear(&self) {
        self.inner
            .state
            .send_modify(|state| state.session = Session::LoggedOut);
        self.remove_stored_keys().await;
    }

    async fn remove_stored_keys(&self) {
        if let Err(e) = self.inner.storage.remove_items(&SESSION_KEYS).await {
            tracing::warn!(error = %e, "failed to remove stored session");
        }
    }

    /// Raises the readiness flag until the returned guard is dropped.
    #[must_use = "the readiness flag drops as soon as the guard does"]
    pub fn begin_exchange(&self) -> ExchangeGuard {
        self.inner.state.send_modify(|state| state.in_flight += 1);
        ExchangeGuard {
            store: self.clone(),
        }
    }
}

/// Keeps the readiness flag raised for the duration of one exchange.
#[derive(Debug)]
pub struct ExchangeGuard {
    store: SessionStore,
}

impl Drop for ExchangeGuard {
    fn drop(&mut self) {
        self.store
            .inner
            .state
            .send_modify(|state| state.in_flight = state.in_flight.saturating_sub(1));
    }
}

/// Builds a session from stored entries, failing closed on anything incomplete.
#[must_use]
pub fn session_from_entries(entries: &BTreeMap<String, String>) -> Session {
    let fields = (
        entries.get(USER_KEY),
        entries.get(ROLE_KEY),
        entries.get(TOKEN_KEY),
        entries.get(BACKEND_URL_KEY),
    );

    let (Some(identity), Some(role), Some(credential), Some(origin)) = fields else {
        if SESSION_KEYS.iter().any(|k| entries.contains_key(*k)) {
            tracing::warn!("stored session is incomplete, ignoring it");
        }
        return Session::LoggedOut;
    };

    match role.parse::<Role>() {
        Ok(role) => Session::LoggedIn(Principal::new(
            identity.as_str(),
            role,
            credential.as_str(),
            origin.as_str(),
        )),
        Err(e) => {
            tracing::warn!(error = %e, "stored session has an unknown role, ignoring it");
            Session::LoggedOut
        }
    }
}
