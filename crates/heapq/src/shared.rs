//! SharedQueue - a `PriorityQueue` behind one exclusive lock.
//!
//! Every operation takes the lock for its whole duration, so callers on
//! other threads never observe a heap mid-sift.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{QueueError, Result};
use crate::item::Item;
use crate::order::{Comparator, Order};
use crate::queue::PriorityQueue;

/// Thread-safe handle to a priority queue.
///
/// # Concurrency Pattern: `Arc<Mutex<T>>`
///
/// Uses `Mutex` for exclusive access because insert and remove both
/// rearrange the heap and must appear atomic. Cloning the handle shares the
/// same underlying queue.
///
/// # Example
///
/// ```
/// use heapq::{Item, PriorityQueue, SharedQueue};
/// use std::thread;
///
/// let queue = SharedQueue::new(PriorityQueue::empty());
///
/// let producer = queue.clone();
/// thread::spawn(move || {
///     producer.insert(Item::new("build", 1)).unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(queue.remove().unwrap().value, "build");
/// ```
pub struct SharedQueue<V, P, C = Order> {
    inner: Arc<Mutex<PriorityQueue<V, P, C>>>,
}

impl<V, P, C> Clone for SharedQueue<V, P, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V, P, C: Comparator<P>> SharedQueue<V, P, C> {
    /// Wraps an existing queue.
    pub fn new(queue: PriorityQueue<V, P, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, PriorityQueue<V, P, C>>> {
        self.inner
            .lock()
            .map_err(|e| QueueError::LockPoisoned(e.to_string()))
    }

    /// Adds an item.
    pub fn insert(&self, item: Item<V, P>) -> Result<()> {
        self.lock()?.insert(item);
        Ok(())
    }

    /// Removes and returns the first-ranked item.
    ///
    /// # Errors
    ///
    /// `QueueError::Empty` if no items are queued, `QueueError::LockPoisoned`
    /// if another thread panicked while holding the lock.
    pub fn remove(&self) -> Result<Item<V, P>> {
        self.lock()?.remove()
    }

    /// Returns a copy of the first-ranked item without removing it.
    ///
    /// Returns a clone since we can't hold a reference across the lock.
    pub fn peek(&self) -> Option<Item<V, P>>
    where
        V: Clone,
        P: Clone,
    {
        let queue = self.lock().ok()?;
        queue.peek().cloned()
    }

    /// Removes every queued item and returns them in priority order.
    ///
    /// The whole drain happens under a single lock acquisition.
    pub fn drain_sorted(&self) -> Result<Vec<Item<V, P>>> {
        let mut queue = self.lock()?;
        Ok(queue.drain_sorted().collect())
    }

    /// Returns the number of queued items (0 if the lock is poisoned).
    pub fn len(&self) -> usize {
        self.lock().map(|q| q.len()).unwrap_or(0)
    }

    /// Returns true if the queue has no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V, P, C: Comparator<P>> From<PriorityQueue<V, P, C>> for SharedQueue<V, P, C> {
    fn from(queue: PriorityQueue<V, P, C>) -> Self {
        Self::new(queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn make_queue() -> SharedQueue<String, u32> {
        SharedQueue::new(PriorityQueue::empty())
    }

    fn make_item(value: &str, priority: u32) -> Item<String, u32> {
        Item::new(value.to_string(), priority)
    }

    #[test]
    fn test_insert_and_remove() {
        let queue = make_queue();

        queue.insert(make_item("later", 5)).unwrap();
        queue.insert(make_item("sooner", 1)).unwrap();

        assert_eq!(queue.remove().unwrap().value, "sooner");
        assert_eq!(queue.remove().unwrap().value, "later");
    }

    #[test]
    fn test_remove_empty() {
        let queue = make_queue();
        assert_eq!(queue.remove(), Err(QueueError::Empty));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek() {
        let queue = make_queue();
        assert!(queue.peek().is_none());

        queue.insert(make_item("only", 3)).unwrap();

        assert_eq!(queue.peek().unwrap().value, "only");
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_drain_sorted() {
        let queue: SharedQueue<String, u32> = PriorityQueue::new(vec![
            make_item("c", 3),
            make_item("a", 1),
            make_item("b", 2),
        ])
        .into();

        let values: Vec<String> = queue
            .drain_sorted()
            .unwrap()
            .into_iter()
            .map(|item| item.value)
            .collect();

        assert_eq!(values, ["a", "b", "c"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_thread_safe_insert() {
        let queue = make_queue();
        let mut handles = vec![];

        for i in 0..10 {
            let q = queue.clone();
            let handle = thread::spawn(move || {
                q.insert(make_item(&format!("Task {}", i), i)).unwrap();
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(queue.len(), 10);
    }

    #[test]
    fn test_concurrent_consumers_drain_everything() {
        let queue = make_queue();
        for i in 0..40 {
            queue.insert(make_item(&format!("Task {}", i), i % 7)).unwrap();
        }

        let processed = Arc::new(AtomicUsize::new(0));
        let mut handles = vec![];

        for _ in 0..4 {
            let q = queue.clone();
            let p = processed.clone();
            let handle = thread::spawn(move || {
                // Each consumer sees its own removals in priority order
                let mut last = 0;
                while let Ok(item) = q.remove() {
                    assert!(item.priority >= last);
                    last = item.priority;
                    p.fetch_add(1, Ordering::SeqCst);
                }
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(processed.load(Ordering::SeqCst), 40);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_lock_poisoned() {
        let queue = make_queue();
        queue.insert(make_item("stuck", 1)).unwrap();

        let q = queue.clone();
        let result = thread::spawn(move || {
            let _guard = q.inner.lock().unwrap();
            panic!("panic while holding queue lock");
        })
        .join();
        assert!(result.is_err());

        assert!(matches!(queue.remove(), Err(QueueError::LockPoisoned(_))));
        assert!(matches!(
            queue.insert(make_item("more", 2)),
            Err(QueueError::LockPoisoned(_))
        ));
        assert_eq!(queue.len(), 0);
        assert!(queue.peek().is_none());
    }
}
