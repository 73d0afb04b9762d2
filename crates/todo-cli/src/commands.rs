//! One-shot command handlers

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use todo_core::cache::FileKeyValueStore;
use todo_core::remote::HttpTodoApi;
use todo_core::task::{TaskFilter, TaskPriority};
use todo_core::{TodoConfig, TodoStore};

use crate::render::render;

/// Delay before the loading indicator is shown
const LOADING_INDICATOR_DELAY: Duration = Duration::from_millis(150);

pub async fn build_store(config: &TodoConfig) -> Result<TodoStore> {
    let storage_path = config.storage_path();
    info!("Using local storage at {:?}", storage_path);

    let cache = FileKeyValueStore::open_lenient(storage_path.clone())
        .await
        .with_context(|| format!("Failed to open local storage at {}", storage_path.display()))?;
    let api = HttpTodoApi::new(config.api_base_url.clone());
    info!("Using todo API at {}", api.base_url());

    Ok(TodoStore::from_config(config, Arc::new(api), Arc::new(cache)))
}

/// Mount the store, printing a loading line if the fetch is slow
pub async fn mount(store: &TodoStore) {
    let mount = store.mount();
    tokio::pin!(mount);
    let mut indicator_checked = false;

    loop {
        tokio::select! {
            _ = &mut mount => break,
            _ = tokio::time::sleep(LOADING_INDICATOR_DELAY), if !indicator_checked => {
                indicator_checked = true;
                if store.is_loading().await {
                    eprintln!("Loading tasks...");
                }
            }
        }
    }
}

pub async fn render_store(store: &TodoStore, filter: TaskFilter) -> String {
    render(&store.snapshot().await, filter, store.priorities_enabled())
}

pub async fn add(store: &TodoStore, title: &str, priority: Option<TaskPriority>) -> Result<()> {
    store.add(title, priority).await?;
    Ok(())
}

pub async fn toggle(store: &TodoStore, id: i64) {
    if !store.toggle(id).await {
        eprintln!("No task with id {}", id);
    }
}

pub async fn delete(store: &TodoStore, id: i64) {
    if store.delete(id).await == 0 {
        eprintln!("No task with id {}", id);
    }
}
