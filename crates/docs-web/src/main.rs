#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use docs_web::config::CONFIG;
    use leptos::prelude::*;

    docs_web::logging::init_logging()?;

    let conf = get_configuration(None).context("Failed to load Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    tracing::info!(
        site = %CONFIG.name,
        sections = CONFIG.sections.len(),
        "Loaded site config"
    );

    let app = docs_web::server::router(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client builds use the `hydrate` export in lib.rs instead
}
