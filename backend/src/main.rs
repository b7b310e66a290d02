use anyhow::Context;
use backend::{api, config::ServerConfig};
use chess_engine::{ChessAgent, ShakmatyRules};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::parse();
    info!(
        "Playing {} with rewards {:?}",
        config.tracked_side,
        config.agent_config().rewards
    );

    // Snapshot loading never fails; a bad file just starts an empty table
    let agent = Arc::new(ChessAgent::load(ShakmatyRules, config.agent_config()));

    let app = api::router(Arc::clone(&agent), &config.static_dir);
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("API listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down, writing final snapshot");
    if let Err(e) = tokio::task::spawn_blocking(move || agent.save()).await? {
        warn!("Final save failed: {}", e);
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
