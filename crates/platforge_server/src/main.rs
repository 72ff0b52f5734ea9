//! PlatForge HTTP server entry point.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use platforge_server::{api, ServerConfig};
use platforge_templates::TemplateGenerator;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();
    info!(
        "Serving templates from {} on {}",
        config.templates_dir.display(),
        config.bind_addr()
    );

    let generator = Arc::new(TemplateGenerator::new(&config.templates_dir));
    let app = api::router(generator);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    axum::serve(listener, app)
        .await
        .context("Server terminated")?;
    Ok(())
}
