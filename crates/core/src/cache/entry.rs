//! Cached task list format
//!
//! The list is always written as an array of full task objects. Older
//! clients stored bare title strings, so reads accept either shape per
//! element and normalize both to [`Task`].

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskPriority};
use crate::Result;

/// Storage key holding the serialized task list
pub const TODOS_KEY: &str = "todos";

/// One element of the cached array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CachedEntry {
    LegacyTitle(String),
    Record(CachedRecord),
}

/// Object-shaped cache element; fields other than `title` may be missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
}

impl CachedEntry {
    /// Normalize to a task at array position `index`.
    ///
    /// `default_priority` is applied when the entry carries none.
    pub fn into_task(self, index: usize, default_priority: Option<TaskPriority>) -> Task {
        let positional_id = index as i64 + 1;
        match self {
            Self::LegacyTitle(title) => Task {
                id: positional_id,
                title,
                completed: false,
                priority: default_priority,
            },
            Self::Record(record) => Task {
                id: record.id.unwrap_or(positional_id),
                title: record.title,
                completed: record.completed,
                priority: record.priority.or(default_priority),
            },
        }
    }
}

/// Decode a cached value into tasks.
///
/// Fails when the value is not a JSON array of strings and task objects.
pub fn decode_cached_tasks(raw: &str, default_priority: Option<TaskPriority>) -> Result<Vec<Task>> {
    let entries: Vec<CachedEntry> = serde_json::from_str(raw)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_task(index, default_priority))
        .collect())
}

pub fn encode_tasks(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string(tasks)?)
}
