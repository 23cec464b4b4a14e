//! Task List App
//!
//! Root component: wires the data-access runtime once and renders the
//! three states of the list query.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Api;
use crate::components::{TaskForm, TaskList};
use crate::config;
use crate::context::provide_api;
use crate::logging;
use crate::store::HttpTaskStore;

#[component]
pub fn App() -> impl IntoView {
    // Constructed once for the lifetime of the page session
    let api = Api::new(HttpTaskStore::new(config::base_url()));
    provide_api(api);

    let list = api.list;

    // Fires on mount and again after every task-list invalidation
    Effect::new(move |_| {
        let epoch = list.epoch().get();
        logging::debug(&format!("[APP] Refreshing task list, epoch={}", epoch));
        spawn_local(async move {
            api.refresh_list().await;
        });
    });

    view! {
        <div class="app">
            <Show when=move || list.is_loading()>
                <div class="loading">"Loading tasks..."</div>
            </Show>

            <Show when=move || list.is_error()>
                <div class="error">"Failed to fetch tasks"</div>
            </Show>

            // Stays mounted across refetches so rows reconcile by key
            // instead of being rebuilt
            <Show when=move || list.is_ready()>
                <header class="app-header">
                    <h1>"Task List"</h1>
                    <p>"Manage your tasks"</p>
                </header>

                <TaskForm/>
                <TaskList/>
            </Show>
        </div>
    }
}
