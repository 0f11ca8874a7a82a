//! # campus-client
//!
//! Leptos + WASM single-page client for account registration, login, and
//! profile management against the campus REST backend.
//!
//! This crate contains pages, components, the session store with its
//! startup reconciliation, route guards, network types, and the HTTP
//! transport used to talk to the backend and the image host.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs logging and mounts the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
