//! Queue entries.

use serde::{Deserialize, Serialize};

/// A value queued under an orderable priority key.
///
/// The queue compares `priority` only. `value` is carried through untouched
/// and handed back to the caller on removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item<V, P> {
    /// Caller-owned payload.
    pub value: V,
    /// Ordering key.
    pub priority: P,
}

impl<V, P> Item<V, P> {
    /// Creates a new item.
    pub fn new(value: V, priority: P) -> Self {
        Self { value, priority }
    }

    /// Splits the item into its value and priority.
    pub fn into_parts(self) -> (V, P) {
        (self.value, self.priority)
    }
}

impl<V, P> From<(V, P)> for Item<V, P> {
    fn from((value, priority): (V, P)) -> Self {
        Self::new(value, priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        let item: Item<&str, i32> = ("write report", 1).into();
        assert_eq!(item, Item::new("write report", 1));
    }

    #[test]
    fn test_into_parts() {
        let (value, priority) = Item::new(String::from("call mom"), 0u8).into_parts();
        assert_eq!(value, "call mom");
        assert_eq!(priority, 0);
    }

    #[test]
    fn test_json_shape() {
        let item = Item::new("clean dishes".to_string(), 2i64);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"value":"clean dishes","priority":2}"#);

        let back: Item<String, i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
