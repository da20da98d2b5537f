//! Stats Bar Component
//!
//! Live total/completed/remaining counts plus the clear-completed control.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::state::Stats;
use crate::store::{store_clear_completed, use_app_store, AppStateStoreFields};

/// Summary counts and the "Clear completed" button
#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let stats = Memo::new(move |_| Stats::from_items(&store.items().get()));
    let none_completed = move || stats.get().completed == 0;

    let clear_completed = move |_| {
        store_clear_completed(&store);
        ctx.announce("Cleared completed items");
    };

    view! {
        <div id="stats" class="stats">
            <span>"Total: " <strong>{move || stats.get().total}</strong></span>
            <span>"Completed: " <strong>{move || stats.get().completed}</strong></span>
            <span>"Remaining: " <strong>{move || stats.get().remaining}</strong></span>
            <button
                class="btn ghost"
                on:click=clear_completed
                disabled=none_completed
                aria-disabled=move || if none_completed() { "true" } else { "false" }
                aria-label="Clear completed items"
            >
                "Clear completed"
            </button>
        </div>
    }
}
