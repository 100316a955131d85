use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{model::Coordinates, provider::open_meteo::DEFAULT_BASE_URL};

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Location shown when the page has no coordinates of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

impl LocationConfig {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: 13.7563,
            longitude: 100.5018,
            label: "Bangkok, Thailand".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Scheme and host of the Open-Meteo API, without the `/v1/forecast` path.
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Identity provider in front of the service and the headers it forwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Provider name passed to the sign-in endpoint, e.g. "keycloak".
    pub provider: String,
    pub signin_url: String,
    pub signout_url: String,
    pub email_header: String,
    pub access_token_header: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: "keycloak".to_string(),
            signin_url: "/oauth2/start".to_string(),
            signout_url: "/oauth2/sign_out".to_string(),
            email_header: "x-forwarded-email".to_string(),
            access_token_header: "x-forwarded-access-token".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Renders the raw session, including the access token. Never enable in production.
    pub panel: bool,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [server]
/// listen = "0.0.0.0:3000"
///
/// [location]
/// latitude = 13.7563
/// longitude = 100.5018
/// label = "Bangkok, Thailand"
///
/// [auth]
/// provider = "keycloak"
///
/// [debug]
/// panel = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub location: LocationConfig,
    pub provider: ProviderConfig,
    pub auth: AuthConfig,
    pub debug: DebugConfig,
}

impl Config {
    /// Load config from the platform config directory, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        let LocationConfig {
            latitude,
            longitude,
            ..
        } = self.location;

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(anyhow!(
                "Default location ({latitude}, {longitude}) is outside valid coordinate ranges"
            ));
        }

        if self.auth.email_header.trim().is_empty() {
            return Err(anyhow!("auth.email_header must not be empty"));
        }

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherdash", "weatherdash")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
