//! File-based key-value store implementation
//!
//! Stores all keys as one JSON object on disk.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::store::KeyValueStore;
use crate::{Error, Result};

/// File-backed key-value store using JSON
pub struct FileKeyValueStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory copy of the file contents
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    /// Open the store at `path`
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = tokio::fs::read(&path).await?;
            if content.iter().all(u8::is_ascii_whitespace) {
                BTreeMap::new()
            } else {
                serde_json::from_slice(&content).map_err(|e| {
                    Error::Storage(format!(
                        "Failed to parse storage file {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Open the store at `path`, starting empty if the file cannot be read
    /// or parsed.
    ///
    /// The unreadable file is left in place until the next write replaces it.
    pub async fn open_lenient(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match Self::new(path.clone()).await {
            Err(e @ (Error::Storage(_) | Error::Io(_))) => {
                warn!(
                    "Cannot load {}: {}; starting with empty local storage",
                    path.display(),
                    e
                );
                Ok(Self {
                    path,
                    entries: RwLock::new(BTreeMap::new()),
                })
            }
            other => other,
        }
    }

    /// Persist the entries to disk
    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(entries)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        debug!("Persisted {} key(s) to {}", entries.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.write().await;
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value);
        // Memory only changes once the file has the new contents
        self.persist(&updated).await?;
        *entries = updated;
        Ok(())
    }
}
