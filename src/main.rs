// ABOUTME: Entry point for the homehub binary.
// ABOUTME: Parses CLI arguments, initializes tracing, seeds the device hub, and serves the HTTP API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use homehub_core::{default_devices, load_seed_file};
use homehub_server::{AppState, HomehubConfig, create_router};

#[derive(Parser)]
#[command(name = "homehub", about = "In-memory device registry with undo", version)]
struct Cli {
    /// Socket address to listen on. Overrides HOMEHUB_BIND.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// JSON or YAML file with the initial device list. Overrides HOMEHUB_SEED_FILE.
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "homehub=debug,homehub_core=debug,homehub_server=debug,tower_http=debug".into()
            }),
        )
        .init();

    let mut config = HomehubConfig::from_env()?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(seed) = cli.seed {
        config.seed_file = Some(seed);
    }

    let devices = match &config.seed_file {
        Some(path) => load_seed_file(path)
            .with_context(|| format!("failed to load seed file {}", path.display()))?,
        None => default_devices(),
    };

    let state = Arc::new(AppState::with_devices(devices)?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("homehub listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("homehub shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
