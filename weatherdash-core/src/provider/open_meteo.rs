use async_trait::async_trait;
use reqwest::{Client, header};

use crate::{error::ForecastError, model::Coordinates};

use super::{ForecastProvider, RawForecast};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

/// How long a forecast response may be reused by caching layers, in seconds.
pub const REVALIDATE_SECS: u64 = 3600;

const CURRENT_FIELDS: &str = "temperature_2m,weather_code,wind_speed_10m,is_day";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const HOURLY_FIELDS: &str = "temperature_2m";
const FORECAST_DAYS: &str = "3";
const USER_AGENT: &str = concat!("weatherdash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    base_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ForecastError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { base_url, http })
    }

    pub fn forecast_url(&self) -> String {
        format!("{}/v1/forecast", self.base_url)
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn fetch_raw(&self, coordinates: Coordinates) -> Result<RawForecast, ForecastError> {
        let latitude = coordinates.lat.to_string();
        let longitude = coordinates.lon.to_string();

        tracing::debug!(%latitude, %longitude, "Requesting Open-Meteo forecast");

        let res = self
            .http
            .get(self.forecast_url())
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_FIELDS),
                ("daily", DAILY_FIELDS),
                ("hourly", HOURLY_FIELDS),
                ("timezone", "auto"),
                ("forecast_days", FORECAST_DAYS),
            ])
            .header(header::CACHE_CONTROL, format!("max-age={REVALIDATE_SECS}"))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ForecastError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
