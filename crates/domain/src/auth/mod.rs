//! Authentication domain types

mod types;

pub use types::{AuthFailure, AuthGrant, AuthMode, AuthSuccess, Credentials, DEFAULT_CREDENTIALS_MESSAGE};
