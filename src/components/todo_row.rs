//! Todo Row Component
//!
//! Single list row with toggle and delete controls.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::TodoItem;
use crate::store::{store_remove_todo, store_toggle_todo, use_app_store};

/// One todo entry with its toggle and delete buttons
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let TodoItem {
        id,
        text,
        completed,
        ..
    } = item;

    let toggle_id = id.clone();
    let toggle_text = text.clone();
    let on_toggle = move |_| {
        if let Some(now_completed) = store_toggle_todo(&store, &toggle_id) {
            if now_completed {
                ctx.announce(format!("Completed: {toggle_text}"));
            } else {
                ctx.announce(format!("Reopened: {toggle_text}"));
            }
        }
    };

    let delete_id = id.clone();
    let delete_text = text.clone();
    let on_delete = move |_| {
        if store_remove_todo(&store, &delete_id).is_some() {
            ctx.announce(format!("Deleted: {delete_text}"));
        }
    };

    let toggle_label = if completed {
        format!("Mark \"{text}\" as not completed")
    } else {
        format!("Mark \"{text}\" as completed")
    };
    let delete_label = format!("Delete {text}");

    view! {
        <li class=if completed { "row done" } else { "row" }>
            <button
                class=if completed { "check checked" } else { "check" }
                on:click=on_toggle
                aria-pressed=if completed { "true" } else { "false" }
                aria-label=toggle_label
                title="Toggle complete"
            >
                {if completed { "✓" } else { "" }}
            </button>
            <span class="text" title=text.clone()>
                {text.clone()}
            </span>
            <button
                class="delete"
                on:click=on_delete
                aria-label=delete_label
                title="Delete"
            >
                "✕"
            </button>
        </li>
    }
}
