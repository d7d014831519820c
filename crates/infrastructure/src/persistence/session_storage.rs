//! File-based session storage.
//!
//! The session is mirrored to a single JSON object of string entries:
//! ```json
//! {
//!   "backend_url": "https://api.quizapp.com",
//!   "role": "admin",
//!   "token": "eyJhbGciOi...",
//!   "user": "cj_pingol"
//! }
//! ```
//! Writes go to a sibling temp file that is then renamed over the real one,
//! so a reader never sees a half-written record.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quizgen_application::ports::{FileSystem, FileSystemError, SessionStorage, StorageError};
use tokio::sync::Mutex;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// File name of the session record inside the data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Session storage backed by one JSON file.
#[derive(Debug)]
pub struct FileSessionStorage<F> {
    fs: F,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl<F: FileSystem> FileSessionStorage<F> {
    /// Creates storage that reads and writes `path`.
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Creates storage for `session.json` inside `dir`.
    pub fn in_dir(fs: F, dir: &Path) -> Self {
        Self::new(fs, dir.join(SESSION_FILE_NAME))
    }

    /// Path of the session file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    async fn read(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.fs.read_file(&self.path).await {
            Ok(bytes) => {
                from_json_bytes(&bytes).map_err(|e| StorageError::Serialization(e.to_string()))
            }
            Err(FileSystemError::NotFound(_)) => Ok(BTreeMap::new()),
            Err(e) => Err(StorageError::Io(e.into())),
        }
    }

    /// Reads for a mutation. A corrupt file is treated as empty so the next
    /// write replaces it.
    async fn read_for_update(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read().await {
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "replacing unreadable session file");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    async fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if entries.is_empty() {
            return match self.fs.remove_file(&self.path).await {
                Ok(()) | Err(FileSystemError::NotFound(_)) => Ok(()),
                Err(e) => Err(StorageError::Io(e.into())),
            };
        }

        let content =
            to_json_stable_bytes(entries).map_err(|e| StorageError::Serialization(e.to_string()))?;
        let tmp = self.tmp_path();

        self.fs
            .write_file(&tmp, &content)
            .await
            .map_err(|e| StorageError::Io(e.into()))?;
        self.fs
            .rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::Io(e.into()))?;

        Ok(())
    }
}

#[async_trait]
impl<F: FileSystem> SessionStorage for FileSessionStorage<F> {
    async fn snapshot(&self) -> Result<BTreeMap<String, String>, StorageError> {
        self.read().await
    }

    async fn set_items(&self, items: &[(&str, &str)]) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_for_update().await?;
        for (key, value) in items {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        self.write(&entries).await
    }

    async fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_for_update().await?;
        entries.retain(|k, _| !keys.contains(&k.as_str()));
        self.write(&entries).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::TokioFileSystem;
    use pretty_assertions::assert_eq;

    fn storage(dir: &Path) -> FileSessionStorage<TokioFileSystem> {
        FileSessionStorage::in_dir(TokioFileSystem::new(), dir)
    }

    #[test]
    fn test_session_path() {
        let storage = storage(Path::new("/data/quizgen"));
        assert_eq!(storage.path(), Path::new("/data/quizgen/session.json"));
    }

    #[tokio::test]
    async fn missing_file_is_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        assert!(storage(dir.path()).snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn entries_survive_a_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        storage(dir.path())
            .set_items(&[("user", "cj"), ("role", "admin")])
            .await
            .unwrap();

        let reopened = storage(dir.path());
        assert_eq!(reopened.get_item("user").await.unwrap().as_deref(), Some("cj"));
        assert_eq!(reopened.snapshot().await.unwrap().len(), 2);
        assert!(!reopened.tmp_path().exists());
    }

    #[tokio::test]
    async fn set_items_merges() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(dir.path());
        storage.set_items(&[("user", "cj"), ("token", "a")]).await.unwrap();
        storage.set_items(&[("token", "b")]).await.unwrap();

        let entries = storage.snapshot().await.unwrap();
        assert_eq!(entries.get("user").map(String::as_str), Some("cj"));
        assert_eq!(entries.get("token").map(String::as_str), Some("b"));
    }

    #[tokio::test]
    async fn removing_everything_deletes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(dir.path());
        storage.set_items(&[("user", "cj"), ("token", "a")]).await.unwrap();

        storage.remove_items(&["token"]).await.unwrap();
        assert_eq!(storage.snapshot().await.unwrap().len(), 1);

        storage.remove_items(&["user", "role"]).await.unwrap();
        assert!(!storage.path().exists());

        // Removing from an absent file is fine.
        storage.remove_items(&["user"]).await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_file_fails_snapshot_but_not_writes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage(dir.path());
        tokio::fs::write(storage.path(), b"{not json").await.unwrap();

        assert!(matches!(
            storage.snapshot().await,
            Err(StorageError::Serialization(_))
        ));

        storage.set_items(&[("user", "cj")]).await.unwrap();
        assert_eq!(storage.snapshot().await.unwrap().len(), 1);
    }
}
