//! Todo Form Component
//!
//! Text input plus Add button; Enter submits the form.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_add_todo, use_app_store};

/// Form for creating new todos
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (draft, set_draft) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Empty or whitespace-only input is silently rejected
        if let Some(item) = store_add_todo(&store, &draft.get()) {
            ctx.announce(format!("Added todo: {}", item.text));
            set_draft.set(String::new());
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    };

    view! {
        <section class="todo-input-card surface" aria-labelledby="add-todo-label">
            <label id="add-todo-label" class="sr-only" for="todo-input">
                "Add a new todo"
            </label>
            <form class="input-row" on:submit=add_todo>
                <input
                    id="todo-input"
                    node_ref=input_ref
                    class="todo-input"
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    aria-label="Todo text"
                />
                <button type="submit" class="btn primary" aria-label="Add todo">
                    "Add"
                </button>
            </form>
        </section>
    }
}
