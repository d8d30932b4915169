//! Process bootstrap for the bloomgate server.
//!
//! Startup sequence:
//! 1. Initialize logging
//! 2. Load configuration (defaults + environment overrides)
//! 3. Construct the filter service once with fixed parameters
//! 4. Serve the HTTP API until Ctrl+C

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bloomgate::config::AppConfig;
use bloomgate::http::{build_router, serve};
use bloomgate::service::FilterService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bloomgate=info,tower_http=warn")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load and validate configuration
    let config = AppConfig::from_env();
    config.validate().context("invalid configuration")?;

    // Construct the single filter instance for the process lifetime
    let service = Arc::new(
        FilterService::new(
            config.filter.expected_items,
            config.filter.false_positive_rate,
        )
        .context("failed to construct filter")?,
    );

    let router = build_router(Arc::clone(&service));

    info!(version = bloomgate::VERSION, "bloomgate starting");
    serve(config.http_addr(), router, shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received shutdown signal");
    }
}
