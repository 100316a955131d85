use anyhow::{Context, Result};
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use weatherdash_core::Config;
use weatherdash_web::{AppState, app};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherdash", version, about = "Personal weather dashboard server")]
pub struct Cli {
    /// Config file; defaults to the platform config directory.
    #[arg(long, env = "WEATHERDASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address, overrides `server.listen`.
    #[arg(short, long, env = "WEATHERDASH_LISTEN")]
    pub listen: Option<String>,

    /// Log level, used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        self.init_tracing();

        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if config.debug.panel {
            warn!("Debug panel enabled: session payloads and access tokens are rendered");
        }

        let listen = self.listen.clone().unwrap_or_else(|| config.server.listen.clone());
        let state = Arc::new(AppState::from_config(&config)?);

        let listener = tokio::net::TcpListener::bind(listen.as_str())
            .await
            .with_context(|| format!("Failed to bind {listen}"))?;
        info!(address = %listen, provider = %config.provider.base_url, "Weather Dash listening");

        axum::serve(listener, app(state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("Shut down");
        Ok(())
    }

    fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        if self.log_json {
            builder.json().init();
        } else {
            builder.init();
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
