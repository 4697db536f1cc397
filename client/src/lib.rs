//! # client
//!
//! Leptos + WASM frontend for the E-Rapor session guard.
//!
//! This crate contains the pages, components, auth state and REST helpers,
//! plus the browser adapters (`localStorage`, `Date.now()`, window listeners)
//! that drive the pure state machines in the `guard` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::console_warn("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
