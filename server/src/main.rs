//! Server entrypoint for session-relay
//!
//! This is the main binary that wires together all layers using
//! dependency injection: config → transport → gateway → engine → router.

use anyhow::{Context, Result};
use clap::Parser;
use relay_application::ResponseEngine;
use relay_infrastructure::{ConfigLoader, HttpTransport, SessionBackendGateway};
use relay_presentation::{AppState, router};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tool-calling chat API over a session-based remote backend
#[derive(Parser, Debug)]
#[command(name = "session-relay", version, about)]
struct Cli {
    /// Path to a config file (overrides discovered configs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(short, long)]
    bind: Option<String>,

    /// Skip config file discovery and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting session-relay");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let bind = cli.bind.unwrap_or_else(|| config.server.bind.clone());

    // === Dependency Injection ===
    // The backend client handle is opened here, once, and owned for the
    // whole process lifetime; it is dropped (closed) on shutdown.
    let transport = Arc::new(
        HttpTransport::new(&config.backend.base_url, config.backend.api_key.clone())
            .context("failed to build backend client")?,
    );
    let gateway = Arc::new(SessionBackendGateway::new(
        transport,
        config.backend.timeouts(),
    ));
    let engine = Arc::new(ResponseEngine::new(gateway));
    let state = AppState::new(engine, config.server.models.clone());

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    info!(
        "Listening on {bind}, relaying to {}",
        config.backend.base_url
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    // Ignore signal registration failure and run unbounded instead
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received ctrl-c, shutting down");
    }
}
