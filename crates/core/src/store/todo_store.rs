//! Todo store: loader and mutators
//!
//! Every mutation applies to the in-memory list first and then overwrites the
//! cached copy with the full list. The remote endpoint only ever sees reads
//! and creates.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::state::ViewState;
use crate::cache::{decode_cached_tasks, encode_tasks, KeyValueStore, TODOS_KEY};
use crate::config::{IdStrategy, TodoConfig};
use crate::outcome::Outcome;
use crate::remote::TodoApi;
use crate::task::{normalize_title, Summary, Task, TaskFilter, TaskPriority};
use crate::Result;

pub const LOAD_FALLBACK_WARNING: &str =
    "Could not reach the todo server. Showing tasks saved on this device.";
pub const CACHE_MISSING_WARNING: &str =
    "Could not reach the todo server and no tasks are saved on this device.";
pub const CACHE_UNREADABLE_WARNING: &str =
    "Could not reach the todo server and the tasks saved on this device could not be read.";
pub const ADD_FALLBACK_WARNING: &str =
    "Could not reach the todo server. The task was saved on this device only.";

/// State container for one todo view
pub struct TodoStore {
    api: Arc<dyn TodoApi>,
    cache: Arc<dyn KeyValueStore>,
    state: RwLock<ViewState>,
    mounted: AtomicBool,
    priorities: bool,
    id_strategy: IdStrategy,
}

impl TodoStore {
    /// Create a store for the priority-capable view with sequential local ids
    pub fn new(api: Arc<dyn TodoApi>, cache: Arc<dyn KeyValueStore>) -> Self {
        Self {
            api,
            cache,
            state: RwLock::new(ViewState::default()),
            mounted: AtomicBool::new(false),
            priorities: true,
            id_strategy: IdStrategy::default(),
        }
    }

    pub fn from_config(
        config: &TodoConfig,
        api: Arc<dyn TodoApi>,
        cache: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self::new(api, cache)
            .with_priorities(config.priorities)
            .with_id_strategy(config.id_strategy)
    }

    /// Enable or disable the priority field and the priority sort
    pub fn with_priorities(mut self, priorities: bool) -> Self {
        self.priorities = priorities;
        self
    }

    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    pub fn priorities_enabled(&self) -> bool {
        self.priorities
    }

    fn default_priority(&self) -> Option<TaskPriority> {
        self.priorities.then(TaskPriority::default)
    }

    // ------------------------------------------------------------------
    // Loader
    // ------------------------------------------------------------------

    /// Run the initial load. Only the first call loads; later calls return
    /// `None`.
    pub async fn mount(&self) -> Option<Outcome<Vec<Task>>> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!("Store already mounted, skipping load");
            return None;
        }
        Some(self.load().await)
    }

    /// Replace the in-memory list from the remote endpoint, or from local
    /// storage when the remote fails.
    ///
    /// Local storage is only read here, never written.
    pub async fn load(&self) -> Outcome<Vec<Task>> {
        self.state.write().await.loading = true;

        let fetched = self.api.list().await;

        let outcome = match fetched {
            Ok(tasks) => {
                let default_priority = self.default_priority();
                let tasks: Vec<Task> = tasks
                    .into_iter()
                    .map(|mut task| {
                        task.priority = task.priority.or(default_priority);
                        task
                    })
                    .collect();
                info!("Loaded {} task(s) from the server", tasks.len());
                Outcome::Fresh(tasks)
            }
            Err(e) => {
                warn!("Failed to load tasks from the server: {}", e);
                self.read_cache().await
            }
        };

        let mut state = self.state.write().await;
        state.tasks = outcome.value().cloned().unwrap_or_default();
        state.warning = outcome.warning().map(str::to_string);
        state.loading = false;
        outcome
    }

    async fn read_cache(&self) -> Outcome<Vec<Task>> {
        let raw = match self.cache.get(TODOS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No cached tasks found");
                return Outcome::Empty(CACHE_MISSING_WARNING.to_string());
            }
            Err(e) => {
                warn!("Failed to read local storage: {}", e);
                return Outcome::Empty(CACHE_UNREADABLE_WARNING.to_string());
            }
        };

        match decode_cached_tasks(&raw, self.default_priority()) {
            Ok(tasks) => {
                info!("Loaded {} task(s) from local storage", tasks.len());
                Outcome::Degraded(tasks, LOAD_FALLBACK_WARNING.to_string())
            }
            Err(e) => {
                warn!("Cached tasks are malformed: {}", e);
                Outcome::Empty(CACHE_UNREADABLE_WARNING.to_string())
            }
        }
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Add a task.
    ///
    /// The title is trimmed and must not be empty; that is the only error.
    /// A remote failure yields a locally built record and `Degraded`.
    pub async fn add(&self, title: &str, priority: Option<TaskPriority>) -> Result<Outcome<Task>> {
        let title = normalize_title(title)?;
        let priority = self.priorities.then(|| priority.unwrap_or_default());

        let created = self.api.create(&title).await;

        let mut state = self.state.write().await;
        let outcome = match created {
            Ok(mut task) => {
                if self.priorities {
                    task.priority = priority;
                }
                info!("Created task {} on the server", task.id);
                Outcome::Fresh(task)
            }
            Err(e) => {
                warn!("Failed to create task on the server: {}", e);
                let id = self.id_strategy.next_id(&state.ids());
                let task = Task {
                    id,
                    title,
                    completed: false,
                    priority,
                };
                info!("Created task {} locally", id);
                Outcome::Degraded(task, ADD_FALLBACK_WARNING.to_string())
            }
        };

        if let Some(task) = outcome.value() {
            state.tasks.push(task.clone());
        }
        if let Some(warning) = outcome.warning() {
            state.warning = Some(warning.to_string());
        }
        self.mirror(&mut state).await;
        Ok(outcome)
    }

    /// Flip `completed` on the task with `id`. Returns whether one was found.
    pub async fn toggle(&self, id: i64) -> bool {
        let mut state = self.state.write().await;
        let mut found = false;
        for task in state.tasks.iter_mut().filter(|t| t.id == id) {
            task.completed = !task.completed;
            found = true;
        }
        if !found {
            debug!("Toggle for unknown task {}", id);
        }
        self.mirror(&mut state).await;
        found
    }

    /// Remove every task with `id`, returning how many were removed
    pub async fn delete(&self, id: i64) -> usize {
        let mut state = self.state.write().await;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        let removed = before - state.tasks.len();
        debug!("Deleted {} task(s) with id {}", removed, id);
        self.mirror(&mut state).await;
        removed
    }

    /// Overwrite local storage with the full in-memory list
    async fn mirror(&self, state: &mut ViewState) {
        let written = match encode_tasks(&state.tasks) {
            Ok(raw) => self.cache.set(TODOS_KEY, raw).await,
            Err(e) => Err(e),
        };
        match written {
            Ok(()) => debug!("Mirrored {} task(s) to local storage", state.tasks.len()),
            Err(e) => {
                warn!("Failed to save tasks to local storage: {}", e);
                state.warning = Some(format!("Could not save tasks on this device: {}", e));
            }
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.state.read().await.tasks.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn warning(&self) -> Option<String> {
        self.state.read().await.warning.clone()
    }

    pub async fn dismiss_warning(&self) {
        self.state.write().await.warning = None;
    }

    /// Tasks to display for `filter`, priority-sorted when priorities are on
    pub async fn visible(&self, filter: TaskFilter) -> Vec<Task> {
        let state = self.state.read().await;
        state
            .visible(filter, self.priorities)
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn summary(&self) -> Summary {
        self.state.read().await.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryKeyValueStore;
    use crate::Error;
    use async_trait::async_trait;
    use tokio::sync::{Mutex, Notify};

    /// In-process stand-in for the remote collection
    struct FakeApi {
        tasks: Option<Vec<Task>>,
        next_id: i64,
        created: Mutex<Vec<String>>,
        gate: Option<Arc<Notify>>,
    }

    impl FakeApi {
        fn online(tasks: Vec<Task>) -> Self {
            Self {
                tasks: Some(tasks),
                next_id: 7,
                created: Mutex::new(Vec::new()),
                gate: None,
            }
        }

        fn offline() -> Self {
            Self {
                tasks: None,
                next_id: 0,
                created: Mutex::new(Vec::new()),
                gate: None,
            }
        }
    }

    #[async_trait]
    impl TodoApi for FakeApi {
        async fn list(&self) -> Result<Vec<Task>> {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.tasks
                .clone()
                .ok_or_else(|| Error::Remote("connection refused".into()))
        }

        async fn create(&self, title: &str) -> Result<Task> {
            if self.tasks.is_none() {
                return Err(Error::Status { status: 503 });
            }
            self.created.lock().await.push(title.to_string());
            Ok(Task::new(self.next_id, title))
        }
    }

    /// Storage whose writes always fail
    struct ReadOnlyStore;

    #[async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: String) -> Result<()> {
            Err(Error::Storage("disk full".into()))
        }
    }

    /// Storage whose reads always fail
    struct UnreadableStore;

    #[async_trait]
    impl KeyValueStore for UnreadableStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Storage("permission denied".into()))
        }

        async fn set(&self, _key: &str, _value: String) -> Result<()> {
            Ok(())
        }
    }

    fn create_test_store(
        api: FakeApi,
        cache: MemoryKeyValueStore,
    ) -> (TodoStore, Arc<FakeApi>, Arc<MemoryKeyValueStore>) {
        let api = Arc::new(api);
        let cache = Arc::new(cache);
        let store = TodoStore::new(api.clone(), cache.clone());
        (store, api, cache)
    }

    async fn cached_tasks(cache: &MemoryKeyValueStore) -> Vec<Task> {
        let raw = cache.get(TODOS_KEY).await.unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn server_tasks() -> Vec<Task> {
        vec![
            Task::new(1, "Buy milk"),
            Task::new(2, "Walk dog").with_completed(true),
        ]
    }

    #[tokio::test]
    async fn test_load_from_server_defaults_priority() {
        let mut tasks = server_tasks();
        tasks[1].priority = Some(TaskPriority::High);
        let (store, _api, cache) =
            create_test_store(FakeApi::online(tasks), MemoryKeyValueStore::new());

        let outcome = store.load().await;
        assert!(matches!(outcome, Outcome::Fresh(_)));

        let state = store.snapshot().await;
        assert_eq!(
            state.tasks,
            vec![
                Task::new(1, "Buy milk").with_priority(TaskPriority::Medium),
                Task::new(2, "Walk dog")
                    .with_completed(true)
                    .with_priority(TaskPriority::High),
            ]
        );
        assert!(state.warning.is_none());
        assert!(!state.loading);
        // Successful loads leave local storage alone
        assert!(cache.get(TODOS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_success_keeps_existing_cache() {
        let cache = MemoryKeyValueStore::with_entry(TODOS_KEY, r#"["stale"]"#);
        let (store, _api, cache) = create_test_store(FakeApi::online(server_tasks()), cache);

        store.load().await;
        assert_eq!(
            cache.get(TODOS_KEY).await.unwrap().as_deref(),
            Some(r#"["stale"]"#)
        );
    }

    #[tokio::test]
    async fn test_load_falls_back_to_cache() {
        let cache = MemoryKeyValueStore::with_entry(
            TODOS_KEY,
            r#"["Legacy", {"id": 9, "title": "Object", "completed": true}]"#,
        );
        let (store, _api, _cache) = create_test_store(FakeApi::offline(), cache);

        let outcome = store.load().await;
        assert_eq!(outcome.warning(), Some(LOAD_FALLBACK_WARNING));

        let state = store.snapshot().await;
        assert_eq!(
            state.tasks,
            vec![
                Task::new(1, "Legacy").with_priority(TaskPriority::Medium),
                Task::new(9, "Object")
                    .with_completed(true)
                    .with_priority(TaskPriority::Medium),
            ]
        );
        assert_eq!(state.warning.as_deref(), Some(LOAD_FALLBACK_WARNING));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_load_without_cache_is_empty() {
        let (store, _api, _cache) =
            create_test_store(FakeApi::offline(), MemoryKeyValueStore::new());

        let outcome = store.load().await;
        assert_eq!(outcome, Outcome::Empty(CACHE_MISSING_WARNING.to_string()));
        assert!(store.tasks().await.is_empty());
        assert!(store.warning().await.is_some());
    }

    #[tokio::test]
    async fn test_load_with_malformed_cache_is_empty() {
        let cache = MemoryKeyValueStore::with_entry(TODOS_KEY, "{not json");
        let (store, _api, _cache) = create_test_store(FakeApi::offline(), cache);

        let outcome = store.load().await;
        assert_eq!(outcome, Outcome::Empty(CACHE_UNREADABLE_WARNING.to_string()));
        assert!(store.tasks().await.is_empty());
        assert_eq!(
            store.warning().await.as_deref(),
            Some(CACHE_UNREADABLE_WARNING)
        );
    }

    #[tokio::test]
    async fn test_load_with_storage_read_error_is_empty() {
        let store = TodoStore::new(Arc::new(FakeApi::offline()), Arc::new(UnreadableStore));

        let outcome = store.load().await;
        assert_eq!(outcome, Outcome::Empty(CACHE_UNREADABLE_WARNING.to_string()));

        let state = store.snapshot().await;
        assert!(state.tasks.is_empty());
        assert_eq!(state.warning.as_deref(), Some(CACHE_UNREADABLE_WARNING));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_mount_loads_once() {
        let (store, _api, _cache) =
            create_test_store(FakeApi::online(server_tasks()), MemoryKeyValueStore::new());

        assert!(store.mount().await.is_some());
        store.delete(1).await;
        assert!(store.mount().await.is_none());
        // The second mount did not reload the deleted task
        assert_eq!(store.tasks().await.len(), 1);
    }

    #[tokio::test]
    async fn test_loading_flag_during_fetch() {
        let gate = Arc::new(Notify::new());
        let mut api = FakeApi::online(server_tasks());
        api.gate = Some(gate.clone());
        let store = Arc::new(TodoStore::new(
            Arc::new(api),
            Arc::new(MemoryKeyValueStore::new()),
        ));

        let loader = {
            let store = store.clone();
            tokio::spawn(async move { store.load().await })
        };

        // Wait until the loader has raised the flag
        while !store.is_loading().await {
            tokio::task::yield_now().await;
        }
        gate.notify_one();

        let outcome = loader.await.unwrap();
        assert!(matches!(outcome, Outcome::Fresh(_)));
        assert!(!store.is_loading().await);
    }

    #[tokio::test]
    async fn test_successful_reload_clears_warning() {
        let (store, _api, _cache) =
            create_test_store(FakeApi::offline(), MemoryKeyValueStore::new());
        store.load().await;
        assert!(store.warning().await.is_some());

        let (online, _api, _cache) =
            create_test_store(FakeApi::online(server_tasks()), MemoryKeyValueStore::new());
        online.state.write().await.warning = Some("old".into());
        online.load().await;
        assert!(online.warning().await.is_none());
    }

    #[tokio::test]
    async fn test_add_with_server() {
        let (store, api, cache) =
            create_test_store(FakeApi::online(vec![]), MemoryKeyValueStore::new());
        store.mount().await;

        let outcome = store
            .add("  Buy milk  ", Some(TaskPriority::High))
            .await
            .unwrap();
        let expected = Task::new(7, "Buy milk").with_priority(TaskPriority::High);
        assert_eq!(outcome, Outcome::Fresh(expected.clone()));

        assert_eq!(store.tasks().await, vec![expected.clone()]);
        assert_eq!(cached_tasks(&cache).await, vec![expected]);
        assert!(store.warning().await.is_none());
        // Only the trimmed title reaches the server
        assert_eq!(api.created.lock().await.as_slice(), &["Buy milk".to_string()]);
    }

    #[tokio::test]
    async fn test_add_without_server_synthesizes_record() {
        let cache = MemoryKeyValueStore::with_entry(TODOS_KEY, r#"["one", "two"]"#);
        let (store, _api, cache) = create_test_store(FakeApi::offline(), cache);
        store.mount().await;
        store.dismiss_warning().await;

        let outcome = store.add("Buy milk", None).await.unwrap();
        let expected = Task::new(3, "Buy milk").with_priority(TaskPriority::Medium);
        assert_eq!(
            outcome,
            Outcome::Degraded(expected.clone(), ADD_FALLBACK_WARNING.to_string())
        );

        let tasks = store.tasks().await;
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[2], expected);
        assert_eq!(cached_tasks(&cache).await, tasks);
        assert_eq!(store.warning().await.as_deref(), Some(ADD_FALLBACK_WARNING));
    }

    #[tokio::test]
    async fn test_add_rejects_blank_title() {
        let (store, api, cache) =
            create_test_store(FakeApi::online(vec![]), MemoryKeyValueStore::new());

        let result = store.add("   ", None).await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(store.tasks().await.is_empty());
        assert!(api.created.lock().await.is_empty());
        assert!(cache.get(TODOS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_without_priorities() {
        let api = Arc::new(FakeApi::offline());
        let cache = Arc::new(MemoryKeyValueStore::new());
        let store = TodoStore::new(api, cache.clone()).with_priorities(false);

        let outcome = store.add("Plain", Some(TaskPriority::High)).await.unwrap();
        let task = outcome.value().cloned().unwrap();
        assert!(task.priority.is_none());

        let raw = cache.get(TODOS_KEY).await.unwrap().unwrap();
        assert!(!raw.contains("priority"));
    }

    #[tokio::test]
    async fn test_sequential_ids_can_repeat_after_delete() {
        let (store, _api, _cache) =
            create_test_store(FakeApi::offline(), MemoryKeyValueStore::new());

        store.add("a", None).await.unwrap();
        store.add("b", None).await.unwrap();
        store.delete(1).await;
        let outcome = store.add("c", None).await.unwrap();

        assert_eq!(outcome.value().map(|t| t.id), Some(2));
        let ids: Vec<i64> = store.tasks().await.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 2]);
    }

    #[tokio::test]
    async fn test_local_negative_ids_do_not_repeat() {
        let api = Arc::new(FakeApi::offline());
        let store = TodoStore::new(api, Arc::new(MemoryKeyValueStore::new()))
            .with_id_strategy(IdStrategy::LocalNegative);

        store.add("a", None).await.unwrap();
        store.add("b", None).await.unwrap();
        store.delete(-1).await;
        store.add("c", None).await.unwrap();

        let ids: Vec<i64> = store.tasks().await.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![-2, -3]);
    }

    #[tokio::test]
    async fn test_toggle_twice_is_identity() {
        let (store, _api, cache) =
            create_test_store(FakeApi::online(server_tasks()), MemoryKeyValueStore::new());
        store.mount().await;
        let original = store.tasks().await;

        assert!(store.toggle(1).await);
        let toggled = store.tasks().await;
        assert!(toggled[0].completed);
        assert_eq!(cached_tasks(&cache).await, toggled);

        assert!(store.toggle(1).await);
        assert_eq!(store.tasks().await, original);
        assert_eq!(cached_tasks(&cache).await, original);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_is_noop() {
        let (store, _api, cache) =
            create_test_store(FakeApi::online(server_tasks()), MemoryKeyValueStore::new());
        store.mount().await;
        let original = store.tasks().await;

        assert!(!store.toggle(99).await);
        assert_eq!(store.tasks().await, original);
        // The list is still mirrored
        assert_eq!(cached_tasks(&cache).await, original);
    }

    #[tokio::test]
    async fn test_delete_removes_all_matches() {
        let cache = MemoryKeyValueStore::with_entry(
            TODOS_KEY,
            r#"[{"id": 1, "title": "a"}, {"id": 2, "title": "b"}, {"id": 1, "title": "c"}]"#,
        );
        let (store, _api, cache) = create_test_store(FakeApi::offline(), cache);
        store.mount().await;

        assert_eq!(store.delete(1).await, 2);
        let tasks = store.tasks().await;
        assert_eq!(tasks.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(cached_tasks(&cache).await, tasks);

        assert_eq!(store.delete(1).await, 0);
    }

    #[tokio::test]
    async fn test_cache_write_failure_sets_warning() {
        let api = Arc::new(FakeApi::online(server_tasks()));
        let store = TodoStore::new(api, Arc::new(ReadOnlyStore));
        store.mount().await;

        assert!(store.toggle(1).await);
        assert!(store.tasks().await[0].completed);
        let warning = store.warning().await.unwrap();
        assert!(warning.contains("disk full"));
    }

    #[tokio::test]
    async fn test_http_api_and_file_storage() {
        use crate::cache::FileKeyValueStore;
        use crate::remote::HttpTodoApi;
        use axum::{http::StatusCode, routing::get, Json, Router};
        use serde_json::json;

        // Listing is broken, creating works
        let app = Router::new().route(
            "/api/v1/todo",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }).post(|| async {
                Json(json!({"data": {"id": 40, "title": "From server", "completed": false}}))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("local-storage.json");
        let cache = FileKeyValueStore::new(&path).await.unwrap();
        cache
            .set(TODOS_KEY, r#"["Saved offline"]"#.to_string())
            .await
            .unwrap();

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let api = HttpTodoApi::with_client(format!("http://{}/api/v1/todo", addr), client);
        let store = TodoStore::new(Arc::new(api), Arc::new(cache));

        let outcome = store.mount().await.unwrap();
        assert_eq!(outcome.warning(), Some(LOAD_FALLBACK_WARNING));

        let added = store.add("From server", Some(TaskPriority::Low)).await.unwrap();
        assert!(matches!(added, Outcome::Fresh(_)));
        store.toggle(1).await;

        let reopened = FileKeyValueStore::new(&path).await.unwrap();
        let raw = reopened.get(TODOS_KEY).await.unwrap().unwrap();
        let cached: Vec<Task> = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            cached,
            vec![
                Task::new(1, "Saved offline")
                    .with_completed(true)
                    .with_priority(TaskPriority::Medium),
                Task::new(40, "From server").with_priority(TaskPriority::Low),
            ]
        );
    }

    #[tokio::test]
    async fn test_visible_and_summary() {
        let (store, _api, _cache) =
            create_test_store(FakeApi::online(vec![]), MemoryKeyValueStore::new());
        store.mount().await;
        store.add("low", Some(TaskPriority::Low)).await.unwrap();
        store.add("high", Some(TaskPriority::High)).await.unwrap();

        let titles: Vec<String> = store
            .visible(TaskFilter::All)
            .await
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["high", "low"]);
        assert!(store.visible(TaskFilter::Completed).await.is_empty());
        assert_eq!(store.summary().await, Summary { completed: 0, total: 2 });
    }
}
