//! In-memory session storage, for sessions that must not outlive the process.

use std::collections::BTreeMap;

use async_trait::async_trait;
use quizgen_application::ports::{SessionStorage, StorageError};
use tokio::sync::RwLock;

/// Session storage kept in process memory.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemorySessionStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn snapshot(&self) -> Result<BTreeMap<String, String>, StorageError> {
        Ok(self.entries.read().await.clone())
    }

    async fn set_items(&self, items: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        for (key, value) in items {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    async fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}
