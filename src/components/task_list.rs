//! Task List Component
//!
//! Renders the cached task list in server order.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_api;

/// Keyed list of task rows.
#[component]
pub fn TaskList() -> impl IntoView {
    let list = use_api().list;

    let tasks = move || list.data().unwrap_or_default();

    view! {
        <ul class="task-list">
            <For
                each=tasks
                key=|task| {
                    // Key on the mutable field too: equal keys skip
                    // re-render, so a refetched completed flip must
                    // produce a new key for its row
                    (task.id, task.completed)
                }
                children=move |task| {
                    view! { <TaskRow task=task/> }
                }
            />
        </ul>
    }
}
