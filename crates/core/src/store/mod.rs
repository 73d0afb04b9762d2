//! Todo store module
//!
//! The state container behind the view: loader, mutators and the
//! write-through mirror into local storage.

mod state;
mod todo_store;

pub use state::ViewState;
pub use todo_store::{
    TodoStore, ADD_FALLBACK_WARNING, CACHE_MISSING_WARNING, CACHE_UNREADABLE_WARNING,
    LOAD_FALLBACK_WARNING,
};
