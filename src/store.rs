//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The helpers
//! below apply the pure transitions from `state` through the store's write
//! guard, so each transition is fully applied before anything observes it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;
use crate::state;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todo items, most recent first
    pub items: Vec<TodoItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole item list (initial load and cross-tab adoption)
pub fn store_init_items(store: &AppStore, items: Vec<TodoItem>) {
    *store.items().write() = items;
}

/// Add a new item from raw input text; returns the created item
pub fn store_add_todo(store: &AppStore, raw_text: &str) -> Option<TodoItem> {
    state::add_todo(&mut store.items().write(), raw_text)
}

/// Toggle an item's completed flag; returns the new value
pub fn store_toggle_todo(store: &AppStore, id: &str) -> Option<bool> {
    state::toggle_todo(&mut store.items().write(), id)
}

/// Remove an item from the store by id; returns the removed item
pub fn store_remove_todo(store: &AppStore, id: &str) -> Option<TodoItem> {
    state::delete_todo(&mut store.items().write(), id)
}

/// Remove every completed item; returns how many were removed
pub fn store_clear_completed(store: &AppStore) -> usize {
    state::clear_completed(&mut store.items().write())
}
