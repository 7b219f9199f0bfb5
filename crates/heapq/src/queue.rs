//! PriorityQueue - array-encoded binary heap.
//!
//! Items live in a single `Vec` viewed as a complete binary tree: the node
//! at index `i` has children at `2i + 1` and `2i + 2` and its parent at
//! `(i - 1) / 2`. Every public operation leaves the heap property intact:
//! no item precedes its parent under the queue's comparator.

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::config::QueueConfig;
use crate::error::{QueueError, Result};
use crate::item::Item;
use crate::order::{Comparator, Order};

/// Priority queue that always yields the item ranked first by its comparator.
///
/// With the default `Order::Min` comparator this is a min-heap: `remove`
/// returns the item with the smallest priority.
///
/// # Ties
///
/// Items with equal priorities come out in an unspecified relative order.
/// The order is deterministic for a given sequence of operations but is
/// neither FIFO nor LIFO. Use a `(priority, sequence)` tuple as the key when
/// insertion order must break ties.
///
/// # Concurrency
///
/// The queue is not synchronized. Wrap it in a `SharedQueue` (or any
/// exclusive lock) to share it between threads.
#[derive(Clone)]
pub struct PriorityQueue<V, P, C = Order> {
    /// Heap-ordered storage.
    items: Vec<Item<V, P>>,
    /// Ranks priorities; whatever compares `Less` leaves first.
    cmp: C,
}

impl<V, P: Ord> PriorityQueue<V, P, Order> {
    /// Builds a min-heap from an arbitrary sequence of items in `O(n)`.
    pub fn new(items: Vec<Item<V, P>>) -> Self {
        Self::with_comparator(items, Order::Min)
    }

    /// Creates an empty min-heap.
    pub fn empty() -> Self {
        Self::empty_with_comparator(Order::Min)
    }

    /// Creates an empty min-heap with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cmp: Order::Min,
        }
    }

    /// Builds a queue from `items` using the order and capacity in `config`.
    pub fn from_config(mut items: Vec<Item<V, P>>, config: &QueueConfig) -> Self {
        items.reserve(config.initial_capacity.saturating_sub(items.len()));
        Self::with_comparator(items, config.order)
    }
}

impl<V, P, C: Comparator<P>> PriorityQueue<V, P, C> {
    /// Builds a queue ordered by `cmp` from an arbitrary sequence in `O(n)`.
    pub fn with_comparator(items: Vec<Item<V, P>>, cmp: C) -> Self {
        let mut queue = Self { items, cmp };
        queue.heapify();
        queue
    }

    /// Creates an empty queue ordered by `cmp`.
    pub fn empty_with_comparator(cmp: C) -> Self {
        Self {
            items: Vec::new(),
            cmp,
        }
    }

    /// Adds an item in `O(log n)`.
    pub fn insert(&mut self, item: Item<V, P>) {
        self.items.push(item);
        let last = self.items.len() - 1;
        self.sift_up(last);
        trace!(len = self.items.len(), "inserted item");
    }

    /// Adds `value` under `priority`.
    pub fn push(&mut self, value: V, priority: P) {
        self.insert(Item::new(value, priority));
    }

    /// Removes and returns the first-ranked item in `O(log n)`.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::Empty` if the queue holds no items. The queue is
    /// left unchanged in that case.
    pub fn remove(&mut self) -> Result<Item<V, P>> {
        self.pop().ok_or_else(|| {
            debug!("remove called on empty priority queue");
            QueueError::Empty
        })
    }

    /// Removes and returns the first-ranked item, or `None` if empty.
    pub fn pop(&mut self) -> Option<Item<V, P>> {
        if self.items.is_empty() {
            return None;
        }

        // Move the last leaf into the root slot, then restore order downward.
        let item = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }

        trace!(len = self.items.len(), "removed item");
        Some(item)
    }

    /// Returns the first-ranked item without removing it.
    pub fn peek(&self) -> Option<&Item<V, P>> {
        self.items.first()
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the queue has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the underlying storage in heap order.
    pub fn as_slice(&self) -> &[Item<V, P>] {
        &self.items
    }

    /// Returns the comparator ordering this queue.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns true if no item precedes its parent.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.items.len()).all(|i| !self.precedes(i, parent(i)))
    }

    /// Removes items in priority order as they are pulled from the iterator.
    ///
    /// Items the iterator does not reach stay in the queue.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, V, P, C> {
        DrainSorted { queue: self }
    }

    /// Consumes the queue, returning every item in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<Item<V, P>> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        self.cmp
            .precedes(&self.items[a].priority, &self.items[b].priority)
    }

    /// Establishes the heap property over the whole array.
    fn heapify(&mut self) {
        let len = self.items.len();
        if len < 2 {
            return;
        }

        debug!(items = len, "heapifying priority queue");
        for i in (0..len / 2).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if !self.precedes(index, up) {
                break;
            }
            self.items.swap(index, up);
            index = up;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.precedes(right, left) {
                right
            } else {
                left
            };

            if !self.precedes(child, index) {
                break;
            }
            self.items.swap(index, child);
            index = child;
        }
    }
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

impl<V, P: Ord> Default for PriorityQueue<V, P, Order> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V, P: Ord> FromIterator<Item<V, P>> for PriorityQueue<V, P, Order> {
    fn from_iter<I: IntoIterator<Item = Item<V, P>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<V, P, C: Comparator<P>> Extend<Item<V, P>> for PriorityQueue<V, P, C> {
    fn extend<I: IntoIterator<Item = Item<V, P>>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<V: fmt::Debug, P: fmt::Debug, C> fmt::Debug for PriorityQueue<V, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Iterator returned by `PriorityQueue::drain_sorted`.
pub struct DrainSorted<'a, V, P, C: Comparator<P>> {
    queue: &'a mut PriorityQueue<V, P, C>,
}

impl<V, P, C: Comparator<P>> Iterator for DrainSorted<'_, V, P, C> {
    type Item = Item<V, P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<V, P, C: Comparator<P>> ExactSizeIterator for DrainSorted<'_, V, P, C> {}

impl<V, P, C: Comparator<P>> FusedIterator for DrainSorted<'_, V, P, C> {}
