use anyhow::{Context, Result};
use std::sync::Arc;
use weatherdash_core::{
    Clock, Config, ForecastProvider, IdentityProvider, LocationConfig, SystemClock, config::AuthConfig,
    provider::OpenMeteoProvider,
};

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn ForecastProvider>,
    pub clock: Arc<dyn Clock>,
    pub identity: IdentityProvider,
    pub auth: AuthConfig,
    pub default_location: LocationConfig,
    pub debug_panel: bool,
}

impl AppState {
    pub fn new(provider: Arc<dyn ForecastProvider>, clock: Arc<dyn Clock>, config: &Config) -> Self {
        Self {
            provider,
            clock,
            identity: IdentityProvider::from_config(&config.auth),
            auth: config.auth.clone(),
            default_location: config.location.clone(),
            debug_panel: config.debug.panel,
        }
    }

    /// Production wiring: Open-Meteo at the configured base URL and the system clock.
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = OpenMeteoProvider::new(config.provider.base_url.as_str())
            .context("Failed to build Open-Meteo HTTP client")?;

        Ok(Self::new(Arc::new(provider), Arc::new(SystemClock), config))
    }
}
