use async_trait::async_trait;

/// Local storage trait - a string key/value store that survives restarts.
///
/// Mirrors the browser's Web Storage API: missing keys read as `None` and
/// removing a missing key is not an error.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Get the value stored under `key`.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Local storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O failed: {0}")]
    Io(String),

    #[error("Storage is corrupt: {0}")]
    Corrupt(String),
}
