//! Queue configuration.

use serde::{Deserialize, Serialize};

use crate::order::Order;

/// Construction-time settings for a `PriorityQueue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Minimum number of slots to reserve up front.
    pub initial_capacity: usize,
    /// Which end of the priority range is extracted first.
    pub order: Order,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            order: Order::Min,
        }
    }
}

impl QueueConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the extraction order.
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }
}
