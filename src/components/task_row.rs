//! Task Row Component
//!
//! A single task in the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_api;
use crate::models::Task;

/// One row: toggle glyph, text, delete button.
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let api = use_api();

    let id = task.id;
    let completed = task.completed;

    view! {
        <li class=if completed { "task-row completed" } else { "task-row" }>
            // Toggle sends the negation of the value rendered here
            <button
                class="toggle-btn"
                on:click=move |_| {
                    spawn_local(async move {
                        api.set_task_completed(id, !completed).await;
                    });
                }
            >
                {if completed { "✓" } else { "○" }}
            </button>

            <span class="task-text">{task.text}</span>

            // No confirmation step
            <button
                class="delete-btn"
                on:click=move |_| {
                    spawn_local(async move {
                        api.delete_task(id).await;
                    });
                }
            >
                "×"
            </button>
        </li>
    }
}
