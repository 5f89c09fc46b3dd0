//! # client
//!
//! Leptos + WASM frontend for the trip planner: the trip page with its
//! interactive map and the sign-in / sign-up page.
//!
//! Map layout, fitting, tiles and markers come from the `tripmap` crate;
//! this crate wires them to reactive state, REST calls and DOM rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    leptos::mount::hydrate_body(app::App);
}
