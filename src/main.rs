//! Chat-bot `settings` command backed by a per-user preference store.

mod adapters;
mod app;
mod bootstrap;
mod core;
mod infra;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|idx| args.get(idx + 1))
        .cloned()
        .unwrap_or_else(|| "config.toml".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = read_log_level(&config_path).unwrap_or("info");
        EnvFilter::new(level)
    });
    // stdout carries bot replies
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(component = "main", "Starting application");

    let app = bootstrap::app::Application::build(config_path).await?;
    app.run().await?;

    Ok(())
}

fn read_log_level(config_path: &str) -> Option<&'static str> {
    let content = std::fs::read_to_string(config_path).ok()?;
    let config: bootstrap::config::Config = toml::from_str(&content).ok()?;
    Some(config.general.log_level.as_str())
}
