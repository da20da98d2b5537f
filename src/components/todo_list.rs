//! Todo List Component
//!
//! Renders the item rows, or an empty-state hint.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// The scrolling list of todos
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="todo-list surface" aria-label="Todo list">
            <Show
                when=move || !store.items().get().is_empty()
                fallback=|| view! {
                    <p class="empty">"No todos yet. Add your first task above."</p>
                }
            >
                <ul class="list" role="list">
                    <For
                        each=move || store.items().get()
                        // Keyed on completion too, so a toggle re-renders the row
                        key=|item| (item.id.clone(), item.completed)
                        children=move |item| view! { <TodoRow item=item /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
