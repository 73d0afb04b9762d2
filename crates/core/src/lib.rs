//! Core library for the todo client
//!
//! This crate contains the client-side state logic, including:
//! - Task model and cache-shape normalization
//! - Remote API client with local cache fallback
//! - The todo store (loader and mutators) and the presenter

pub mod cache;
pub mod config;
pub mod error;
pub mod outcome;
pub mod remote;
pub mod store;
pub mod task;

pub use config::{IdStrategy, TodoConfig};
pub use error::Error;
pub use outcome::Outcome;
pub use store::{TodoStore, ViewState};
pub type Result<T> = std::result::Result<T, Error>;
