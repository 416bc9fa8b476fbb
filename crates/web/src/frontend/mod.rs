//! Leptos frontend of the storefront.

pub mod app;

pub use app::App;

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::config::StorefrontConfig;

/// Mount the storefront view tree to `<body>`.
pub fn mount(config: StorefrontConfig) {
    tracing::info!(theme = %config.theme, title = %config.title, "mounting storefront");
    mount_to_body(move || view! { <App config=config/> });
}

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    storefront_observability::init_browser();

    mount(StorefrontConfig::default());
}
