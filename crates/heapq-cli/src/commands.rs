//! Builds the task queue and drains it.

use std::io::Write;

use heapq::{PriorityQueue, QueueConfig};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::error::Result;
use crate::task::{self, Task};

/// Runs the command described by `cli`, writing drained tasks to `out`.
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let (mut initial, mut later) = if cli.demo {
        let (initial, extra) = task::demo_tasks();
        (initial, vec![extra])
    } else {
        (Vec::new(), Vec::new())
    };

    if let Some(path) = &cli.file {
        initial.extend(task::load_tasks(path)?);
    }
    initial.extend(task::parse_tasks(&cli.tasks)?);
    later.extend(task::parse_tasks(&cli.add)?);

    let config = QueueConfig::new()
        .with_initial_capacity(cli.capacity)
        .with_order(cli.order());
    let mut queue = PriorityQueue::from_config(initial, &config);
    info!(tasks = queue.len(), order = ?config.order, "built task queue");

    for task in later {
        debug!(task = %task.value, priority = task.priority, "inserting task");
        queue.insert(task);
    }

    if cli.json {
        let drained: Vec<Task> = queue.drain_sorted().collect();
        serde_json::to_writer_pretty(&mut *out, &drained)?;
        writeln!(out)?;
        return Ok(());
    }

    while let Some(task) = queue.pop() {
        writeln!(out, "Doing task: {}", task.value)?;
    }

    Ok(())
}
