//! # client
//!
//! Leptos + WASM frontend for the product advisor chat.
//!
//! This crate contains the page, components, conversation state, wire types,
//! and the HTTP client that relays messages to the remote assistant service.
//! The server binary links it with the `ssr` feature; the browser bundle is
//! built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
