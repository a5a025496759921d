//! # client
//!
//! Leptos + WASM single-page demo for the `router` crate.
//!
//! `routing` binds the framework-agnostic path observer, navigator, and route
//! table to Leptos signals and context. `pages` holds the two demo views and
//! `app` composes them into a route table.
//!
//! Build for the browser with the `csr` feature (e.g. `trunk serve`); without
//! it the crate compiles natively against the in-memory location so the
//! reactive bindings can be unit tested.

pub mod app;
pub mod pages;
pub mod routing;

/// WASM entry point: install browser logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
