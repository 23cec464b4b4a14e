//! Deployment Configuration
//!
//! Exactly one value: the base address of the remote task store.

/// Base URL of the remote task store.
///
/// Fixed per deployment; set `TASKS_API_URL` at build time to override.
pub fn base_url() -> &'static str {
    option_env!("TASKS_API_URL").unwrap_or("http://localhost:3000")
}
