//! State Transitions
//!
//! Pure transition functions over the todo list plus the derived stats
//! projection. Each transition validates its input, applies in place, and
//! reports what changed so callers can announce it. Unknown ids and empty
//! text are benign no-ops, never errors.

use crate::models::TodoItem;

/// Trim and collapse internal whitespace runs to single spaces
pub fn sanitize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Prepend a new item built from `raw_text`.
///
/// Returns a clone of the created item, or `None` when the text sanitizes
/// to empty (state unchanged).
pub fn add_todo(items: &mut Vec<TodoItem>, raw_text: &str) -> Option<TodoItem> {
    let text = sanitize_text(raw_text);
    if text.is_empty() {
        return None;
    }
    let item = TodoItem::new(text);
    items.insert(0, item.clone());
    Some(item)
}

/// Flip `completed` on the matching item.
///
/// Returns the new `completed` value, or `None` when no item matches.
pub fn toggle_todo(items: &mut [TodoItem], id: &str) -> Option<bool> {
    let item = items.iter_mut().find(|item| item.id == id)?;
    item.completed = !item.completed;
    Some(item.completed)
}

/// Remove the matching item, preserving the relative order of the rest.
///
/// Returns the removed item, or `None` when no item matches.
pub fn delete_todo(items: &mut Vec<TodoItem>, id: &str) -> Option<TodoItem> {
    let position = items.iter().position(|item| item.id == id)?;
    Some(items.remove(position))
}

/// Drop every completed item. Returns how many were removed.
pub fn clear_completed(items: &mut Vec<TodoItem>) -> usize {
    let before = items.len();
    items.retain(|item| !item.completed);
    before - items.len()
}

/// Read-only counts derived from the current item list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

impl Stats {
    pub fn from_items(items: &[TodoItem]) -> Self {
        let total = items.len();
        let completed = items.iter().filter(|item| item.completed).count();
        Self {
            total,
            completed,
            remaining: total - completed,
        }
    }
}
