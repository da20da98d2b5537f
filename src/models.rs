//! Frontend Models
//!
//! Data structures matching the persisted storage format.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo entry (matches the stored JSON shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique, stable for the item's lifetime
    pub id: String,
    /// Sanitized display text, never empty
    pub text: String,
    pub completed: bool,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "createdAt")]
    pub created_at: f64,
}

impl TodoItem {
    /// Create a fresh, uncompleted item. `text` must already be sanitized.
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            completed: false,
            created_at: now_ms(),
        }
    }
}

/// Wall-clock time in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = TodoItem::new("Buy milk".to_string());
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
        assert!(item.created_at > 0.0);
        assert!(!item.id.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = TodoItem::new("a".to_string());
        let b = TodoItem::new("a".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_created_at_non_decreasing() {
        let a = TodoItem::new("first".to_string());
        let b = TodoItem::new("second".to_string());
        assert!(b.created_at >= a.created_at);
    }

    #[test]
    fn test_serializes_with_camel_case_timestamp() {
        let item = TodoItem {
            id: "abc".to_string(),
            text: "Walk dog".to_string(),
            completed: true,
            created_at: 1234.0,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"createdAt\":1234.0"));
        assert!(!json.contains("created_at"));

        let back: TodoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
