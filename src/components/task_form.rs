//! Task Form Component
//!
//! Input and submit control for creating new tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_api;
use crate::store::CreateTaskArgs;

/// Form for creating new tasks. Submits on button click or Enter.
#[component]
pub fn TaskForm() -> impl IntoView {
    let api = use_api();

    let (draft, set_draft) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        // Draft clears right away, not on server acknowledgement. Empty
        // drafts pass through; the store accepts them.
        set_draft.set(String::new());
        spawn_local(async move {
            api.create_task(&CreateTaskArgs { text: &text, completed: false }).await;
        });
    };

    view! {
        <form class="task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Enter your task"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_draft.set(input.value());
                }
            />
            <button type="submit">"Add Task"</button>
        </form>
    }
}
