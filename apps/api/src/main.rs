mod analysis;
mod catalog;
mod config;
mod errors;
mod extraction;
mod routes;
mod scoring;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Scan API v{}", env!("CARGO_PKG_VERSION"));

    // Build the role catalog once; it is never mutated afterwards
    let catalog = match &config.role_catalog_path {
        Some(path) => RoleCatalog::from_path(path)
            .with_context(|| format!("Failed to load role catalog from {}", path.display()))?,
        None => RoleCatalog::builtin(),
    };
    anyhow::ensure!(!catalog.is_empty(), "Role catalog defines no roles");
    info!("Role catalog loaded ({} roles)", catalog.len());

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        extractor: Arc::new(PdfTextExtractor),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
