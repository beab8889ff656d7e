// ABOUTME: Entry point for the itemd binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and serves the item API until Ctrl-C.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use itemd_server::{AppState, ItemdConfig, config::parse_bind, create_router};

#[derive(Debug, Parser)]
#[command(name = "itemd")]
#[command(about = "In-memory item CRUD service", long_about = None)]
struct Cli {
    /// Socket address to bind; overrides ITEMD_BIND
    #[arg(long)]
    bind: Option<String>,

    /// Allow cross-origin requests from any origin; overrides ITEMD_CORS
    #[arg(long)]
    cors: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    itemd_server::logging::init();

    let cli = Cli::parse();
    let mut config = ItemdConfig::from_env()?;
    if let Some(bind) = cli.bind.as_deref() {
        config.bind = parse_bind(bind)?;
    }
    config.cors |= cli.cors;

    serve(config).await
}

async fn serve(config: ItemdConfig) -> anyhow::Result<()> {
    let app = create_router(AppState::shared(), config.cors);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!(%addr, cors = config.cors, "itemd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("itemd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
