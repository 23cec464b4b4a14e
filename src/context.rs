//! Application Context
//!
//! The data-access runtime is constructed once at mount and provided to
//! the whole component tree via the Leptos context API.

use leptos::prelude::*;

use crate::api::Api;

/// Make the runtime available to all children.
pub fn provide_api(api: Api) {
    provide_context(api);
}

/// Get the runtime from context.
pub fn use_api() -> Api {
    expect_context::<Api>()
}
