//! heapq command-line runner.
//!
//! Builds a task queue from the command line or a JSON file and works
//! through it in priority order.

pub mod cli;
pub mod commands;
pub mod error;
pub mod task;

pub use error::{CliError, Result};
