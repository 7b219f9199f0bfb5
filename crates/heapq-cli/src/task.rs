//! Task parsing and loading.

use std::fs;
use std::path::Path;

use heapq::Item;
use tracing::debug;

use crate::error::{CliError, Result};

/// A named task with an integer priority.
pub type Task = Item<String, i64>;

/// Parses a `NAME=PRIORITY` spec.
///
/// The split happens on the last `=`, so names may themselves contain `=`.
pub fn parse_task(spec: &str) -> Result<Task> {
    let (name, priority) = spec
        .rsplit_once('=')
        .ok_or_else(|| CliError::InvalidTask(spec.to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidTask(spec.to_string()));
    }

    let priority = priority
        .trim()
        .parse::<i64>()
        .map_err(|_| CliError::InvalidTask(spec.to_string()))?;

    Ok(Item::new(name.to_string(), priority))
}

/// Parses every spec, failing on the first invalid one.
pub fn parse_tasks<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Task>> {
    specs.iter().map(|s| parse_task(s.as_ref())).collect()
}

/// Loads tasks from a JSON array of `{"value": ..., "priority": ...}` objects.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let content = fs::read_to_string(path)?;
    let tasks: Vec<Task> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Built-in household task list; `call mom` is meant to be inserted later.
pub fn demo_tasks() -> (Vec<Task>, Task) {
    (
        vec![
            Item::new("clean dishes".to_string(), 2),
            Item::new("write report".to_string(), 1),
        ],
        Item::new("call mom".to_string(), 0),
    )
}
