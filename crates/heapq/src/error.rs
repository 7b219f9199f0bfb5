//! Error types for priority queue operations.

use thiserror::Error;

/// Errors that can occur during priority queue operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Extraction was attempted on a queue with no items.
    #[error("priority queue is empty")]
    Empty,

    /// Lock poisoned (thread panicked while holding lock).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type alias for priority queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(QueueError::Empty.to_string(), "priority queue is empty");
        assert_eq!(
            QueueError::LockPoisoned("boom".into()).to_string(),
            "lock poisoned: boom"
        );
    }
}
