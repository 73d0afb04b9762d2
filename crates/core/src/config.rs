//! Client configuration
//!
//! Read from the environment; the CLI layers its flags on top.

use serde::Serialize;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1/todo";
pub const DEFAULT_DATA_DIR: &str = ".todo-data";
pub const STORAGE_FILE_NAME: &str = "local-storage.json";

/// How ids are synthesized for records created while the remote is down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Current list length + 1. Can repeat an id after a delete.
    #[default]
    Sequential,
    /// One below the smallest id in the list (and never above -1), so local
    /// ids stay out of the server's positive range.
    LocalNegative,
}

impl IdStrategy {
    pub fn next_id(self, existing: &[i64]) -> i64 {
        match self {
            Self::Sequential => existing.len() as i64 + 1,
            Self::LocalNegative => existing.iter().copied().min().unwrap_or(0).min(0) - 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoConfig {
    /// Base URL of the remote todo collection
    pub api_base_url: String,
    /// Directory holding the local storage file
    pub data_dir: PathBuf,
    /// Priority-capable variant: tasks carry a priority and the view sorts by it
    pub priorities: bool,
    pub id_strategy: IdStrategy,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            priorities: true,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl TodoConfig {
    /// Build from `TODO_API_URL`, `TODO_DATA_DIR`, `TODO_PRIORITIES` and
    /// `TODO_LOCAL_IDS`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup("TODO_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.api_base_url);
        let data_dir = lookup("TODO_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let priorities = flag(lookup("TODO_PRIORITIES"), defaults.priorities);
        let id_strategy = if flag(lookup("TODO_LOCAL_IDS"), false) {
            IdStrategy::LocalNegative
        } else {
            IdStrategy::Sequential
        };

        Self {
            api_base_url,
            data_dir,
            priorities,
            id_strategy,
        }
    }

    /// Path of the file backing local storage
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE_NAME)
    }
}

fn flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}
