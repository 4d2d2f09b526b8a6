//! # folio
//!
//! Leptos + WASM interactivity layer for a static portfolio site.
//!
//! The crate renders the page's interactive regions (navigation menu, theme
//! toggle, paginated gallery, team cards, and the project/profile modals)
//! and keeps the class and id names the site stylesheet expects. All state
//! logic lives in plain structs under `state` so it can be unit tested
//! natively; browser glue is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs diagnostics, loads config, and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let _ = console_log::init_with_level(log::Level::Trace);
    let config = crate::config::SiteConfig::load();
    log::set_max_level(config.log_level().to_level_filter());

    log::info!("mounting folio ({} gallery items)", config.gallery.len());
    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
