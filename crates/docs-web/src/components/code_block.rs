use leptos::prelude::*;

use super::CopyButton;

/// A code snippet followed by its copy button.
///
/// The button must stay the next element sibling of the `.code-block`
/// container: the binder looks for the `<code>` there.
#[component]
pub fn CodeBlock(
    #[prop(into)] code: String,
    #[prop(default = None)] caption: Option<String>,
    #[prop(default = None)] language: Option<String>,
) -> impl IntoView {
    let code_class = language.map(|lang| format!("language-{}", lang));

    view! {
        <figure class="snippet mb-4">
            {caption.map(|text| view! { <figcaption class="text-sm text-[var(--ink-light)] mb-1">{text}</figcaption> })}
            <div class="code-block border border-dashed border-[var(--rule)] p-3 mb-2 overflow-x-auto">
                <pre><code class=code_class>{code}</code></pre>
            </div>
            <CopyButton />
        </figure>
    }
}
