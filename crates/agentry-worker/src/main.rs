use std::path::Path;

use agentry_core::StaticConfig;
use agentry_worker::{RunnerConfig, RunnerMode};
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agentry_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("agentry-worker starting...");

    // Static configuration loads once; runs share it read-only
    let config_path = std::env::var("AGENTRY_CONFIG").ok();
    let statics = StaticConfig::load(config_path.as_deref().map(Path::new))?;
    let runner = RunnerConfig::from_env(&statics.worker);
    tracing::info!(mode = ?runner.mode, task_queue = %runner.task_queue, "Runner mode configured");

    match runner.mode {
        RunnerMode::InProcess => {
            // In-process mode: workflows are started by the embedding layer
            tracing::info!("Worker running in passive mode (in-process execution)");
            tracing::info!("Worker ready, waiting for shutdown signal...");
            tokio::signal::ctrl_c().await?;
        }
        RunnerMode::Temporal => {
            // Durable engine integration is not wired up in this build
            tracing::warn!("Temporal mode requested but not available");
            tracing::info!("Falling back to passive mode, waiting for shutdown signal...");
            tokio::signal::ctrl_c().await?;
        }
    }

    tracing::info!("Worker shutdown complete");
    Ok(())
}
