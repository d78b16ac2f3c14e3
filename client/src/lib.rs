//! # client
//!
//! Leptos + WASM front-end for the Intelligence admin console.
//!
//! This crate contains pages, components and the browser implementations of
//! the `session` crate's seams: `localStorage` persistence and a Fetch-based
//! HTTP transport. Build the browser bundle with the `csr` feature; native
//! builds compile the same UI with inert browser stubs for testing.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
