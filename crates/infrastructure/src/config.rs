//! Application configuration.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. TOML file (`--config`, or `{config_dir}/quizgen/config.toml` if present)
//! 3. Environment variables prefixed `QUIZGEN__`, with `__` between keys
//!    (`QUIZGEN__BACKEND__URL`, `QUIZGEN__AUTH__SALT`)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::adapters::DEFAULT_USER_AGENT;
use crate::persistence::SESSION_FILE_NAME;

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "quizgen";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or did not match the expected shape.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),

    /// An explicitly requested file does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// No data directory is configured and the platform has none.
    #[error("could not determine a data directory; set storage.data_dir")]
    NoDataDir,
}

/// Backend settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendConfig {
    /// Origin offered as the default on the login and signup forms.
    pub url: Option<String>,
}

/// Authentication settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthConfig {
    /// Shared salt sent with login requests.
    pub salt: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            salt: option_env!("QUIZGEN_AUTH_SALT").map(str::to_string),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout. No timeout when unset.
    pub timeout_secs: Option<u64>,
    /// User-Agent header.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding `session.json`.
    pub data_dir: Option<PathBuf>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Backend settings.
    pub backend: BackendConfig,
    /// Authentication settings.
    pub auth: AuthConfig,
    /// HTTP client settings.
    pub http: HttpConfig,
    /// Storage settings.
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Loads configuration from every source.
    ///
    /// An explicit `path` must exist. The default path is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is missing or a source is malformed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                if let Some(default) = Self::default_path() {
                    builder = builder.add_source(
                        File::from(default)
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix("QUIZGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!(?path, backend = ?config.backend.url, "configuration loaded");
        Ok(config)
    }

    /// Default config file location, `{config_dir}/quizgen/config.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR_NAME).join("config.toml"))
    }

    /// Directory holding the session file.
    ///
    /// # Errors
    ///
    /// Returns `NoDataDir` if neither the config nor the platform names one.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        self.storage
            .data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join(APP_DIR_NAME)))
            .ok_or(ConfigError::NoDataDir)
    }

    /// Full path of the session file.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::data_dir`].
    pub fn session_path(&self) -> Result<PathBuf, ConfigError> {
        Ok(self.data_dir()?.join(SESSION_FILE_NAME))
    }
}
