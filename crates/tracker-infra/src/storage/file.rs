//! File-backed local storage.
//!
//! All keys live in a single JSON object on disk. Every read goes to the
//! file, so a value written by another process is seen on the next call.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use tracker_core::ports::{LocalStore, StorageError};

/// Local storage persisted as a JSON object in one file.
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Storage file is not valid JSON");
            StorageError::Corrupt(e.to_string())
        })
    }

    async fn persist(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let raw = serde_json::to_string_pretty(items)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        // Write to a sibling file and rename so readers never see a partial file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl LocalStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.load().await?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.load().await?;
        items.insert(key.to_string(), value.to_string());
        self.persist(&items).await?;

        tracing::debug!(path = %self.path.display(), key = %key, "Stored item");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.load().await?;
        if items.remove(key).is_some() {
            self.persist(&items).await?;
            tracing::debug!(path = %self.path.display(), key = %key, "Removed item");
        }

        Ok(())
    }
}
