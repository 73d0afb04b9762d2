//! Remote API module
//!
//! This module provides the client for the remote todo collection.

mod client;

pub use client::{CreateTaskRequest, DataEnvelope, HttpTodoApi, TodoApi};
