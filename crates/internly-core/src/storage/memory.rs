//! In-memory key-value store.
//!
//! Ephemeral `KvStore` implementation for tests and throwaway sessions.
//! The durable SQLite-backed store lives in internly-infra.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use internly_types::error::StoreError;

use super::kv_store::KvStore;

/// Mutex-protected map behind the `KvStore` interface.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<Mutex<HashMap<String, serde_json::Value>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, serde_json::Value>> {
        // A poisoned lock means a test thread panicked mid-write; the map
        // itself is still a plain HashMap, so keep going with its contents.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        self.lock().insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}
