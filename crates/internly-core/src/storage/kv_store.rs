//! Key-value store trait.
//!
//! Defines the interface for the flat local key/value namespace that holds
//! all persisted state. Implementations live in internly-infra.

use internly_types::error::StoreError;

/// Trait for the flat key-value persistent store.
///
/// Stores arbitrary JSON values keyed by string, mirroring the original
/// browser-local storage layout. Uses RPITIT (native async fn in traits,
/// Rust 2024 edition).
///
/// Callers follow a read-entire-value, mutate-in-memory, write-entire-value
/// discipline with at most one logical operation in flight at a time;
/// implementations do not arbitrate concurrent read-modify-write cycles.
pub trait KvStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>, StoreError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Remove a key. No-op if the key does not exist.
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
