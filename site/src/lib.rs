//! # site
//!
//! Leptos + WASM single-page portfolio. Replaces a React + Tailwind page
//! with a Rust-native UI layer: hero section with typewriter and
//! shooting-star effects (via the `fx` crate), tabbed about section,
//! project showcase, contact form with transactional email dispatch, and
//! footer.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
