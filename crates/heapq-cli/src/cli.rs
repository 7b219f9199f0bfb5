//! Command-line interface definition using clap.

use clap::Parser;
use heapq::Order;
use std::path::PathBuf;

/// heapq - work through tasks in priority order
#[derive(Parser, Debug)]
#[command(name = "heapq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Tasks used to build the queue, as NAME=PRIORITY
    pub tasks: Vec<String>,

    /// JSON file with an array of {"value": ..., "priority": ...} tasks
    #[arg(short, long, env = "HEAPQ_TASK_FILE")]
    pub file: Option<PathBuf>,

    /// Tasks inserted one by one after the queue is built, as NAME=PRIORITY
    #[arg(short, long = "add", value_name = "TASK")]
    pub add: Vec<String>,

    /// Run the largest priority first instead of the smallest
    #[arg(long)]
    pub max_first: bool,

    /// Slots to reserve before building the queue
    #[arg(long, default_value_t = 0)]
    pub capacity: usize,

    /// Print drained tasks as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Use the built-in household task list
    #[arg(long)]
    pub demo: bool,
}

impl Cli {
    /// Returns the extraction order selected on the command line.
    pub fn order(&self) -> Order {
        if self.max_first {
            Order::Max
        } else {
            Order::Min
        }
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
