//! Key-value store for persisted client state
//!
//! This module provides a small, type-safe key-value store using sled.
//! Values are JSON-encoded. The application uses it for exactly two
//! entries (the session token and the user id), but the store itself is
//! generic over any serde-compatible value.

use serde::{de::DeserializeOwned, Serialize};
use sled::Db;
use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Flush interval in milliseconds (None for immediate flush)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "stayfinder_kv.db".to_string(),
            cache_capacity: 8 * 1024 * 1024, // 8MB
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Key-value store implementation
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Create a new key-value store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        tracing::debug!(path = %config.path, "opening key-value store");

        let mut db_config = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity);

        if let Some(ms) = config.flush_every_ms {
            db_config = db_config.flush_every_ms(Some(ms));
        }

        let db = db_config.open()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a value by key
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value by key
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    /// Remove a value by key (returns true if the key existed)
    pub fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Clear all data
    pub fn clear(&self) -> Result<()> {
        self.db.clear()?;
        Ok(())
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Get the number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get_string() {
        let store = KvStore::in_memory().unwrap();

        store.set("userToken", &"abc123".to_string()).unwrap();
        let value: Option<String> = store.get("userToken").unwrap();
        assert_eq!(value, Some("abc123".to_string()));
    }

    #[test]
    fn test_get_missing_key() {
        let store = KvStore::in_memory().unwrap();
        let value: Option<String> = store.get("nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_remove() {
        let store = KvStore::in_memory().unwrap();

        store.set("userId", &"42".to_string()).unwrap();
        assert!(store.remove("userId").unwrap());
        assert!(!store.remove("userId").unwrap());

        let value: Option<String> = store.get("userId").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_contains() {
        let store = KvStore::in_memory().unwrap();

        assert!(!store.contains("userToken").unwrap());
        store.set("userToken", &"tok".to_string()).unwrap();
        assert!(store.contains("userToken").unwrap());
    }

    #[test]
    fn test_clear() {
        let store = KvStore::in_memory().unwrap();

        store.set("a", &1u32).unwrap();
        store.set("b", &2u32).unwrap();
        assert_eq!(store.len(), 2);

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_persistence_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv_test.db");

        {
            let store = KvStore::new(KvConfig::new(path.to_string_lossy())).unwrap();
            store.set("userToken", &"persisted".to_string()).unwrap();
            store.flush().unwrap();
        }

        let store = KvStore::new(KvConfig::new(path.to_string_lossy())).unwrap();
        let value: Option<String> = store.get("userToken").unwrap();
        assert_eq!(value, Some("persisted".to_string()));
    }
}
