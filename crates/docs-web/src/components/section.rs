use leptos::prelude::*;

use super::CodeBlock;
use crate::config::DocSection;

/// One documentation section: heading with anchor, prose, then snippets.
#[component]
pub fn Section(section: DocSection) -> impl IntoView {
    let DocSection {
        id,
        title,
        body,
        snippets,
    } = section;
    let anchor_href = format!("#{}", id);

    view! {
        <section id=id class="mb-8">
            <h2 class="font-bold uppercase mb-3">
                {format!("\u{2500}\u{2524} {} \u{251C}\u{2500}", title)}
                <a href=anchor_href class="section-anchor ml-1">" \u{00A7}"</a>
            </h2>
            <div class="pl-4 border-l border-dashed border-[var(--rule)]">
                {body.into_iter().map(|paragraph| view! { <p class="mb-3">{paragraph}</p> }).collect_view()}
                {snippets
                    .into_iter()
                    .map(|snippet| {
                        view! {
                            <CodeBlock code=snippet.code caption=snippet.caption language=snippet.language />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
