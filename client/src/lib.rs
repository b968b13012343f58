//! # client
//!
//! Leptos + WASM frontend for the score lookup page.
//!
//! This crate contains the page, its components, application state, and the
//! grade-lookup HTTP client. Built with `hydrate` it runs in the browser;
//! built with `ssr` it renders the initial HTML for the host binary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
