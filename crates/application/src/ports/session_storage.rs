//! Durable session storage port
//!
//! A flat string key-value store, the mirror the session store rehydrates from.

use std::collections::BTreeMap;

use async_trait::async_trait;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Repository trait for durable key-value session storage.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Reads every stored entry in one consistent snapshot.
    ///
    /// # Returns
    /// All entries. Returns an empty map if nothing was ever stored.
    async fn snapshot(&self) -> Result<BTreeMap<String, String>, StorageError>;

    /// Writes several entries at once, replacing existing values.
    async fn set_items(&self, items: &[(&str, &str)]) -> Result<(), StorageError>;

    /// Removes several entries at once. Missing keys are ignored.
    async fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError>;

    /// Gets a single value.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.snapshot().await?;
        Ok(entries.remove(key))
    }
}
