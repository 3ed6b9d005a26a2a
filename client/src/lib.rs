//! # endaloop-client
//!
//! Leptos + WASM landing page for the EndALoop waitlist.
//!
//! The page is almost entirely static copy. The interesting parts live in
//! [`state`]: a view router that swaps the top-level page without a reload,
//! and a per-form waitlist submitter that posts an email to the collection
//! endpoint. Components mirror both into Leptos signals and render them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod runtime;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
