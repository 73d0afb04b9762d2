//! Key-value store trait
//!
//! The local cache is an opaque string-to-string store, like browser local
//! storage. Callers own the value format.

use async_trait::async_trait;

use crate::Result;

/// Interface for the local key-value cache
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    async fn set(&self, key: &str, value: String) -> Result<()>;
}
