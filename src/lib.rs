//! # resumeai-client
//!
//! Leptos + WASM frontend for the ResumeAI resume SaaS. Replaces the React
//! client with a Rust-native UI layer: routed pages over a REST backend, with
//! the auth/session/entitlement gate implemented in `session`.
//!
//! The crate compiles natively with no features for unit tests; the `browser`
//! feature enables the WASM dependencies and the mount entry point.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

/// Browser entry point: mounts the app onto `<body>`.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
