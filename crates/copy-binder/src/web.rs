//! Browser implementations of the platform traits (web-sys + gloo-timers).

use std::future::Future;
use std::time::Duration;

use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement};

use crate::binder::ClipboardButtonBinder;
use crate::config::BinderConfig;
use crate::error::{BindError, ClipboardError};
use crate::platform::{ActivationHandler, Clipboard, CopyControl, CopyRoot, Timer};

/// Bind every copy control below `root` with the browser clipboard.
///
/// This is the page's initialization entry point: call it once after the
/// document has loaded.
pub fn bind_copy_buttons(root: &Element, config: BinderConfig) -> Result<usize, BindError> {
    ClipboardButtonBinder::new(config, NavigatorClipboard, BrowserTimer, BrowserSpawner).bind(root)
}

// ── DOM ───────────────────────────────────────────────────────────────────────

impl CopyRoot for Element {
    type Control = HtmlElement;

    fn copy_controls(&self, selector: &str) -> Result<Vec<HtmlElement>, BindError> {
        let nodes = self
            .query_selector_all(selector)
            .map_err(|err| BindError::InvalidSelector {
                selector: selector.to_string(),
                reason: describe(&err),
            })?;

        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }
}

impl CopyControl for HtmlElement {
    fn code_text(&self, code_selector: &str) -> Option<String> {
        let code = self
            .previous_element_sibling()?
            .query_selector(code_selector)
            .ok()??;

        // innerText is the rendered text; non-HTML elements (SVG) only have textContent
        match code.dyn_into::<HtmlElement>() {
            Ok(html) => Some(html.inner_text()),
            Err(other) => other.text_content(),
        }
    }

    fn set_label(&self, text: &str) {
        self.set_inner_text(text);
    }

    fn on_activate(&self, handler: ActivationHandler) -> Result<(), BindError> {
        let closure = Closure::<dyn FnMut()>::wrap(handler);
        self.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|err| BindError::Listener(describe(&err)))?;
        // Listeners live as long as the page
        closure.forget();
        Ok(())
    }
}

// ── Clipboard ─────────────────────────────────────────────────────────────────

/// `navigator.clipboard.writeText`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorClipboard;

impl NavigatorClipboard {
    fn start_write(text: &str) -> Result<js_sys::Promise, ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let navigator = window.navigator();

        // The API is missing on old browsers and outside secure contexts
        let has_clipboard =
            js_sys::Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false);
        if !window.is_secure_context() || !has_clipboard {
            return Err(ClipboardError::Unavailable);
        }

        Ok(navigator.clipboard().write_text(text))
    }
}

impl Clipboard for NavigatorClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        let started = Self::start_write(text);

        async move {
            match started {
                Ok(promise) => JsFuture::from(promise).await.map(|_| ()).map_err(|err| {
                    web_sys::console::error_2(&JsValue::from_str("Failed to copy:"), &err);
                    ClipboardError::Rejected(describe(&err))
                }),
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to copy: {}", err).into());
                    Err(err)
                }
            }
        }
    }
}

// ── Scheduling ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}

/// Spawns onto the browser microtask queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => format!("{:?}", value),
    }
}
