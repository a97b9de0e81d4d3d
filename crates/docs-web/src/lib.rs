pub mod app;
pub mod components;
pub mod config;
#[cfg(feature = "ssr")]
pub mod logging;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;

/// Client entry point, called by the hydration script once the wasm bundle
/// has loaded. The page is server-rendered; the only client-side behaviour
/// is the copy buttons.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        web_sys::console::error_1(&"No document body, copy buttons not bound".into());
        return;
    };

    // Client always uses the embedded config; DOCS_CONFIG is server-only
    let copy = config::SiteConfig::embedded().copy;
    match copy_binder::web::bind_copy_buttons(&body, copy) {
        Ok(count) => web_sys::console::debug_1(&format!("Bound {} copy buttons", count).into()),
        Err(e) => web_sys::console::error_1(&format!("Failed to bind copy buttons: {}", e).into()),
    }
}
