//! Ocean Tasks App
//!
//! Root component: restores persisted items, mirrors every change back to
//! storage, adopts edits from other tabs, and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{StatsBar, TodoForm, TodoList};
use crate::context::AppContext;
use crate::storage;
use crate::store::{store_init_items, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    let (announcement, set_announcement) = signal(String::new());
    provide_context(AppContext::new((announcement, set_announcement)));

    // Restore persisted items once, before the persist effect is installed.
    // Missing or malformed data means we start empty.
    if let Some(saved) = storage::load() {
        web_sys::console::log_1(&format!("[APP] Restored {} items", saved.len()).into());
        store_init_items(&store, saved);
    }

    // Persist every change
    Effect::new(move |_| {
        storage::save(&store.items().get());
    });

    // Adopt writes from other tabs (full replace, last writer wins)
    storage::subscribe_external_changes(move |items| {
        web_sys::console::log_1(
            &format!("[SYNC] Adopted {} items from another tab", items.len()).into(),
        );
        store_init_items(&store, items);
    });

    view! {
        <div class="app-root">
            <header class="app-header">
                <h1 class="app-title" aria-label="Application title">
                    "Ocean Tasks"
                </h1>
                <p class="app-subtitle">
                    "A minimal, focused todo list with a professional ocean theme."
                </p>
            </header>

            <main class="app-container" role="main" aria-describedby="stats">
                <TodoForm />
                <StatsBar />
                <TodoList />

                <div class="sr-only" aria-live="polite" aria-atomic="true">
                    {move || announcement.get()}
                </div>
            </main>

            <footer class="app-footer">
                <small>"Made with Leptos • Ocean Professional Theme"</small>
            </footer>
        </div>
    }
}
