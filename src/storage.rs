//! Persistence Adapter
//!
//! Mirrors the item list into `localStorage` and listens for `storage`
//! events so edits made in another tab are adopted here. Storage is a
//! best-effort mirror: the in-memory state stays authoritative for the
//! session, and every failure degrades to "behave as if nothing was
//! persisted".

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::models::TodoItem;

/// Namespaced key holding the JSON-encoded item array
pub const STORAGE_KEY: &str = "todo.items";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

/// Decode a stored value. Anything that is not a valid item array counts
/// as "no data".
pub fn parse_items(raw: &str) -> Option<Vec<TodoItem>> {
    serde_json::from_str(raw).ok()
}

/// Read the persisted item list, or `None` when storage is unavailable,
/// the key is absent, or the value does not decode.
pub fn load() -> Option<Vec<TodoItem>> {
    let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    parse_items(&raw)
}

/// Write the item list. Quota or disabled-storage failures are swallowed.
pub fn save(items: &[TodoItem]) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(items) {
        let _ = storage.set_item(STORAGE_KEY, &json);
    }
}

/// Invoke `handler` with the new item list whenever another tab writes our
/// key. A removed key adopts the empty list; an unparseable value is
/// ignored. The listener lives for the whole app, so the closure is leaked.
pub fn subscribe_external_changes(handler: impl Fn(Vec<TodoItem>) + 'static) {
    let on_storage = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
        move |ev: web_sys::StorageEvent| {
            if ev.key().as_deref() != Some(STORAGE_KEY) {
                return;
            }
            match ev.new_value() {
                Some(raw) => {
                    if let Some(items) = parse_items(&raw) {
                        handler(items);
                    }
                }
                None => handler(Vec::new()),
            }
        },
    );

    if let Some(win) = web_sys::window() {
        let _ = win
            .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref());
    }
    on_storage.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<TodoItem> {
        vec![
            TodoItem {
                id: "id-2".to_string(),
                text: "Walk dog".to_string(),
                completed: false,
                created_at: 2000.0,
            },
            TodoItem {
                id: "id-1".to_string(),
                text: "Buy milk".to_string(),
                completed: true,
                created_at: 1000.0,
            },
        ]
    }

    #[test]
    fn test_serialized_items_round_trip() {
        let items = sample_items();
        let json = serde_json::to_string(&items).unwrap();
        assert_eq!(parse_items(&json).unwrap(), items);
    }

    #[test]
    fn test_parse_accepts_wire_format() {
        let raw = r#"[{"id":"a","text":"Buy milk","completed":false,"createdAt":1.5}]"#;
        let items = parse_items(raw).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Buy milk");
        assert_eq!(items[0].created_at, 1.5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_items("not json").is_none());
        assert!(parse_items("{\"items\": []}").is_none());
        assert!(parse_items("42").is_none());
        assert!(parse_items("[{\"id\": 7}]").is_none());
    }

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse_items("[]").unwrap(), Vec::new());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn save_then_load_round_trips() {
        let items = vec![TodoItem::new("Buy milk".to_string())];
        save(&items);
        assert_eq!(load().unwrap(), items);

        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }

    #[wasm_bindgen_test]
    fn load_ignores_corrupt_value() {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, "not json");
        }
        assert!(load().is_none());

        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
