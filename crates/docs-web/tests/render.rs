//! Server-side render checks: copy buttons must come out in the DOM shape
//! the client-side binder expects.

#![cfg(feature = "ssr")]

use docs_web::components::{CodeBlock, Section};
use docs_web::config::{DocSection, Snippet};
use leptos::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn code_block_puts_copy_button_after_code_container() {
    let html = view! { <CodeBlock code="echo hi" language=Some("bash".to_string()) /> }.to_html();

    let container = html.find("class=\"code-block").expect("code container rendered");
    let code = html.find("<code class=\"language-bash\"").expect("code element rendered");
    let button = html.find("copy-btn").expect("copy button rendered");

    assert!(container < code && code < button, "unexpected order: {}", html);
    assert!(html.contains("echo hi"));
    assert!(html.contains("Copy"), "idle label missing: {}", html);
}

#[test]
fn code_is_escaped() {
    let html = view! { <CodeBlock code="cat a.txt > b.txt && echo <done>" /> }.to_html();

    assert!(html.contains("&lt;done&gt;"), "not escaped: {}", html);
    assert!(!html.contains("<done>"));
}

#[test]
fn section_renders_every_snippet_with_its_own_button() {
    let section = DocSection {
        id: "usage".to_string(),
        title: "Usage".to_string(),
        body: vec!["Run it.".to_string()],
        snippets: vec![
            Snippet {
                caption: Some("one".to_string()),
                language: None,
                code: "./nmap_scanner -targets 10.0.0.1".to_string(),
            },
            Snippet {
                caption: None,
                language: None,
                code: "./nmap_scanner -targets example.com".to_string(),
            },
        ],
    };

    let html = view! { <Section section=section /> }.to_html();

    assert!(html.contains("id=\"usage\""));
    assert!(html.contains("href=\"#usage\""));
    assert!(html.contains("Run it."));
    assert_eq!(html.matches("copy-btn").count(), 2);
    assert_eq!(html.matches("class=\"code-block").count(), 2);
}
