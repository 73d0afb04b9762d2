//! Local cache module
//!
//! This module contains the key-value store abstraction, its file-backed and
//! in-memory implementations, and the decoding of cached task lists.

mod entry;
mod file_store;
mod memory_store;
mod store;

pub use entry::{decode_cached_tasks, encode_tasks, CachedEntry, CachedRecord, TODOS_KEY};
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
pub use store::KeyValueStore;
