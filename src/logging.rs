//! Console Logging Helpers
//!
//! Routes to the browser console in the wasm build. Native builds (tests)
//! fall back to stderr, since wasm-bindgen imports are not callable there.

#[cfg(target_arch = "wasm32")]
pub fn debug(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn debug(msg: &str) {
    eprintln!("[DEBUG] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("[WARN] {}", msg);
}
