//! Repository Layer - Core Traits
//!
//! Durable key-value storage as seen by the favorites store.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::DomainResult;

/// String key-value storage
///
/// Values are opaque strings (the store writes JSON).
/// All operations are async to support various backends.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if it was never written
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write `value` under `key`, overwriting any prior value
    async fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    async fn remove(&self, key: &str) -> DomainResult<()>;
}
