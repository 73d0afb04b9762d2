//! Task module
//!
//! This module contains the task model and the presenter over task lists.

mod filter;
mod model;

pub use filter::{present, summarize, Summary, TaskFilter};
pub use model::*;
