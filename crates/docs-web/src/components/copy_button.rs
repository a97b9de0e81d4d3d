use leptos::prelude::*;

use crate::config::CONFIG;

/// A copy button for the code block rendered just before it.
///
/// Rendered inert on the server; the wasm bundle finds it by its
/// `copy-btn` class and attaches the clipboard handler.
#[component]
pub fn CopyButton() -> impl IntoView {
    view! {
        <button
            type="button"
            class="copy-btn px-3 py-1 border border-dashed border-[var(--rule)] hover:bg-[var(--rule)] transition-colors cursor-pointer"
        >
            {CONFIG.copy.labels.idle.clone()}
        </button>
    }
}
