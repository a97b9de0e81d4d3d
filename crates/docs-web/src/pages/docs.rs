use crate::config::CONFIG;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::components::Section;

#[component]
pub fn DocsPage() -> impl IntoView {
    let title = format!("{} - documentation", CONFIG.name);
    let canonical = format!("{}/", CONFIG.base_url);

    view! {
        <Title text=title />
        <Meta name="description" content=CONFIG.tagline.clone() />
        <Link rel="canonical" href=canonical />
        <main class="max-w-[80ch] mx-auto px-4 py-4 md:py-8">
            <header class="mb-8 text-center">
                <h1 class="text-xl font-bold mb-2">
                    {format!("\u{2500}\u{2524} {} \u{251C}\u{2500}", CONFIG.name)}
                </h1>
                <div class="text-[var(--ink-light)] mt-2">{CONFIG.tagline.clone()}</div>
            </header>

            // Table of contents
            <nav class="mb-8 border border-dashed border-[var(--rule)] p-4">
                <ul class="list-none space-y-1">
                    {CONFIG
                        .sections
                        .iter()
                        .map(|s| {
                            let href = format!("#{}", s.id);
                            view! { <li><a href=href>{s.title.clone()} " \u{2192}"</a></li> }
                        })
                        .collect_view()}
                </ul>
            </nav>

            {CONFIG.sections.iter().cloned().map(|section| view! { <Section section=section /> }).collect_view()}

            <footer class="mt-8 pt-4 border-t border-dashed border-[var(--rule)] text-center text-[var(--ink-light)] text-sm">
                <a href="#">"\u{2191} back to top"</a>
            </footer>
        </main>
    }
}
