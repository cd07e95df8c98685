//! Storage abstractions for internly.
//!
//! Defines the `KvStore` trait, the persisted key layout, and the
//! whole-collection read/write helpers the services share. The durable
//! implementation lives in internly-infra; `MemoryKvStore` here backs
//! tests and throwaway sessions.

pub mod kv_store;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;

use internly_types::error::StoreError;
use kv_store::KvStore;

/// The flat persisted key namespace.
///
/// Key names are kept verbatim from the original layout so an existing
/// store reads back unchanged.
pub mod keys {
    pub const USER: &str = "user";
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    pub const SKILLS: &str = "skills";
    pub const APPLICATIONS: &str = "applications";
}

/// Read an entire stored collection.
///
/// A missing key is an empty collection. A stored value that fails the
/// schema-checked parse is also treated as empty (with a warning) rather
/// than propagated; the next successful write repairs the key.
pub async fn read_collection<T, S>(store: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: KvStore,
{
    let Some(value) = store.get(key).await? else {
        return Ok(Vec::new());
    };
    match serde_json::from_value(value) {
        Ok(items) => Ok(items),
        Err(err) => {
            tracing::warn!(key, %err, "stored collection failed to parse, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Overwrite an entire stored collection under its key.
pub async fn write_collection<T, S>(store: &S, key: &str, items: &[T]) -> Result<(), StoreError>
where
    T: Serialize,
    S: KvStore,
{
    let value =
        serde_json::to_value(items).map_err(|e| StoreError::Query(e.to_string()))?;
    store.set(key, &value).await
}

/// Read a single stored record, with the same parse-failure fallback as
/// `read_collection` (a corrupt record reads as absent).
pub async fn read_record<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KvStore,
{
    let Some(value) = store.get(key).await? else {
        return Ok(None);
    };
    match serde_json::from_value(value) {
        Ok(record) => Ok(Some(record)),
        Err(err) => {
            tracing::warn!(key, %err, "stored record failed to parse, treating as absent");
            Ok(None)
        }
    }
}
