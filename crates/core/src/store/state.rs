//! View state snapshot

use serde::Serialize;

use crate::task::{present, summarize, Summary, Task, TaskFilter};

/// What the view renders from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub tasks: Vec<Task>,
    /// True while the initial (or a requested) load is waiting on the remote
    pub loading: bool,
    /// Single human-readable warning shown above the list
    pub warning: Option<String>,
}

impl ViewState {
    pub fn visible(&self, filter: TaskFilter, sort_by_priority: bool) -> Vec<&Task> {
        present(&self.tasks, filter, sort_by_priority)
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.tasks)
    }

    pub(crate) fn ids(&self) -> Vec<i64> {
        self.tasks.iter().map(|t| t.id).collect()
    }
}
