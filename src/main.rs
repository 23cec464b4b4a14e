#![allow(warnings)]
//! Task List Frontend Entry Point

mod models;
mod config;
mod logging;
mod store;
mod query;
mod api;
mod context;
mod components;
mod app;

#[cfg(test)]
mod tests;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
