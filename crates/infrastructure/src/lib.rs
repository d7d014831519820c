//! Quizgen Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod serialization;

pub use adapters::{DEFAULT_USER_AGENT, ReqwestIdentityClient};
pub use config::{AppConfig, AuthConfig, BackendConfig, ConfigError, HttpConfig, StorageConfig};
pub use persistence::{
    FileSessionStorage, MemorySessionStorage, SESSION_FILE_NAME, TokioFileSystem,
};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};
