//! Quizgen - terminal quiz client
//!
//! Wires configuration, storage, the identity client and the terminal pages
//! together. `main.rs` only parses arguments and sets up logging.

pub mod cli;
pub mod commands;

use std::sync::Arc;

use quizgen_application::{Authenticator, SessionStorage, SessionStore};
use quizgen_domain::QuestionBank;
use quizgen_infrastructure::{
    AppConfig, FileSessionStorage, MemorySessionStorage, ReqwestIdentityClient, TokioFileSystem,
};
use quizgen_ui::UiContext;

/// Opens the session storage the configuration asks for.
///
/// # Errors
///
/// Returns an error if no data directory can be determined.
pub fn open_storage(config: &AppConfig, ephemeral: bool) -> anyhow::Result<Arc<dyn SessionStorage>> {
    if ephemeral {
        tracing::debug!("using in-memory session storage");
        return Ok(Arc::new(MemorySessionStorage::new()));
    }

    let storage = FileSessionStorage::in_dir(TokioFileSystem::new(), &config.data_dir()?);
    tracing::debug!(path = %storage.path().display(), "using file session storage");
    Ok(Arc::new(storage))
}

/// Builds the page context: hydrated session store, HTTP client and
/// authenticator.
///
/// # Errors
///
/// Returns an error if storage cannot be located or the HTTP client cannot
/// be created.
pub async fn build_context(
    config: &AppConfig,
    ephemeral: bool,
) -> anyhow::Result<UiContext<ReqwestIdentityClient>> {
    let store = SessionStore::hydrate(open_storage(config, ephemeral)?).await;
    let client = ReqwestIdentityClient::from_config(&config.http)?;
    let authenticator = Authenticator::new(client, store).with_salt(config.auth.salt.clone());

    Ok(UiContext::new(authenticator, QuestionBank::builtin())
        .with_default_origin(config.backend.url.clone()))
}
