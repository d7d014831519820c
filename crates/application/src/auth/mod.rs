//! Authentication module for the Quizgen client.
//!
//! This module provides:
//! - The session store that owns the current session and its durable mirror
//! - The authenticator that performs login and signup exchanges
//! - Classification of identity service responses

mod authenticator;
mod grant;
mod session_store;

pub use authenticator::Authenticator;
pub use grant::classify;
pub use session_store::{
    BACKEND_URL_KEY, ExchangeGuard, ROLE_KEY, SESSION_KEYS, SessionState, SessionStore, TOKEN_KEY,
    USER_KEY, session_from_entries,
};

#[cfg(test)]
pub(crate) use session_store::tests::FakeStorage;
