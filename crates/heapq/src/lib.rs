//! Binary min-heap priority queue for ordering work items.
//!
//! This crate provides the `PriorityQueue` for ordering items by priority:
//! - Array-encoded complete binary tree (no per-node allocation)
//! - Linear-time heapify when built from an existing sequence
//! - `O(log n)` insert and extract-minimum
//! - Injectable comparison through the `Comparator` trait
//! - `SharedQueue` wrapper using `Arc<Mutex<T>>` for cross-thread use
//!
//! # Example
//!
//! ```
//! use heapq::{Item, PriorityQueue, QueueError};
//!
//! let mut queue = PriorityQueue::new(vec![
//!     Item::new("clean dishes", 2),
//!     Item::new("write report", 1),
//! ]);
//! queue.insert(Item::new("call mom", 0));
//!
//! while !queue.is_empty() {
//!     let task = queue.remove().unwrap();
//!     println!("Doing task: {}", task.value);
//! }
//!
//! assert_eq!(queue.remove(), Err(QueueError::Empty));
//! ```

pub mod config;
pub mod error;
pub mod item;
pub mod order;
pub mod queue;
pub mod shared;

pub use config::QueueConfig;
pub use error::{QueueError, Result};
pub use item::Item;
pub use order::{Comparator, Order};
pub use queue::{DrainSorted, PriorityQueue};
pub use shared::SharedQueue;
