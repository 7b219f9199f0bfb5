//! Priority comparison strategies.
//!
//! The queue never compares priorities directly; every sift step asks its
//! `Comparator` instead. Whatever the comparator ranks `Less` is extracted
//! first.
//!
//! Three kinds of comparator are available:
//! - `Order::Min` (the default): natural order, smallest priority first
//! - `Order::Max`: reversed natural order, largest priority first
//! - any `Fn(&P, &P) -> Ordering` closure, e.g. for `f64` keys

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Decides which of two priorities is extracted first.
pub trait Comparator<P> {
    /// Compares two priorities. `Less` means `a` leaves the queue before `b`.
    fn compare(&self, a: &P, b: &P) -> Ordering;

    /// Returns true if `a` strictly precedes `b`.
    fn precedes(&self, a: &P, b: &P) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Built-in orderings over `Ord` priorities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Smallest priority first (min-heap).
    #[default]
    Min,
    /// Largest priority first.
    Max,
}

impl<P: Ord> Comparator<P> for Order {
    fn compare(&self, a: &P, b: &P) -> Ordering {
        match self {
            Order::Min => a.cmp(b),
            Order::Max => b.cmp(a),
        }
    }
}

impl<P, F> Comparator<P> for F
where
    F: Fn(&P, &P) -> Ordering,
{
    fn compare(&self, a: &P, b: &P) -> Ordering {
        self(a, b)
    }
}
