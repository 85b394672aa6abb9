//! In-memory local storage - used in tests and for throwaway sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tracker_core::ports::{LocalStore, StorageError};

/// In-memory store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryStore {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocalStore for InMemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let store = self.store.read().await;
        Ok(store.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryStore::new();
        store.set_item("key1", "value1").await.unwrap();
        assert_eq!(
            store.get_item("key1").await.unwrap(),
            Some("value1".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryStore::new();
        store.set_item("key1", "value1").await.unwrap();
        store.set_item("key2", "value2").await.unwrap();
        store.remove_item("key1").await.unwrap();
        assert_eq!(store.get_item("key1").await.unwrap(), None);
        assert_eq!(
            store.get_item("key2").await.unwrap(),
            Some("value2".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_missing_key() {
        let store = InMemoryStore::new();
        assert!(store.remove_item("missing").await.is_ok());
    }
}
