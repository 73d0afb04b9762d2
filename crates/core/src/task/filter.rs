//! Presenter: filtered and sorted views over the task list
//!
//! Everything here is pure; nothing touches the store or the cache.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::model::Task;
use crate::Error;

/// Which tasks the view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(Error::InvalidInput(format!(
                "Unknown filter '{}', expected all, active or completed",
                other
            ))),
        }
    }
}

/// Completed count over the unfiltered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub completed: usize,
    pub total: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} completed", self.completed, self.total)
    }
}

/// Derive the displayed sequence.
///
/// With `sort_by_priority` the filtered tasks are ordered high > medium > low;
/// `sort_by_key` is stable so equal priorities keep their list order.
pub fn present(tasks: &[Task], filter: TaskFilter, sort_by_priority: bool) -> Vec<&Task> {
    let mut visible: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t)).collect();
    if sort_by_priority {
        visible.sort_by_key(|t| std::cmp::Reverse(t.priority_rank()));
    }
    visible
}

pub fn summarize(tasks: &[Task]) -> Summary {
    Summary {
        completed: tasks.iter().filter(|t| t.completed).count(),
        total: tasks.len(),
    }
}
