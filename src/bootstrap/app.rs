use crate::adapters::console::{self, ConsoleArgs};
use crate::app::services::preferences::PreferenceStore;
use crate::bootstrap::config::Config;
use crate::core::registry::SettingsRegistry;
use crate::core::shutdown;
use crate::infra::db::Database;
use anyhow::{Context, Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct Application {
    config: Arc<Config>,
    db: Database,
    registry: Arc<SettingsRegistry>,
    cancel_token: CancellationToken,
}

impl Application {
    pub async fn build(config_path: String) -> Result<Self> {
        tracing::info!(path = %config_path, "Loading config");

        let config_content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {config_path}"))?;
        let config: Config = toml::from_str(&config_content)?;

        let registry = config
            .build_registry()
            .context("Invalid [[settings]] configuration")?;
        if registry.is_empty() {
            tracing::warn!("No settings are registered; every settings command will be rejected");
        }
        tracing::info!(
            count = registry.len(),
            settings = ?registry.names().collect::<Vec<_>>(),
            "Settings registry loaded"
        );

        let config_dir = Path::new(&config_path)
            .parent()
            .unwrap_or_else(|| Path::new("."));
        let db_path_str = config
            .database
            .resolve_path(config_dir)
            .to_str()
            .ok_or_else(|| anyhow!("Invalid DB path"))?
            .to_string();
        tracing::info!(db_path = %db_path_str, lang = %config.general.default_lang, "Database path");

        let db = Database::new(&db_path_str).await?;

        Ok(Self {
            config: Arc::new(config),
            db,
            registry: Arc::new(registry),
            cancel_token: CancellationToken::new(),
        })
    }

    pub async fn run(self) -> Result<()> {
        let Self {
            config,
            db,
            registry,
            cancel_token,
        } = self;

        tokio::spawn(shutdown::wait_for_shutdown_signal(cancel_token.clone()));

        let store = PreferenceStore::new(db.clone(), registry);
        let result = console::run_console(ConsoleArgs {
            store,
            lang: config.general.default_lang,
            command_prefix: config.general.command_prefix.clone(),
            cancel_token: cancel_token.clone(),
        })
        .await;

        if let Err(e) = &result {
            tracing::error!(error = %e, "Console adapter stopped with an error");
        }
        cancel_token.cancel();

        tracing::info!(component = "shutdown", "Closing database pool");
        db.close().await;
        tracing::info!(component = "shutdown", "Database pool closed");

        result
    }
}
