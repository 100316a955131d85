use async_trait::async_trait;
use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;
use std::fmt::Debug;

use crate::{
    error::ForecastError,
    model::{Coordinates, CurrentConditions, DailyForecast, HourlyPoint, WeatherViewModel, round_temperature},
};

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// Number of hourly points shown on the dashboard chart.
pub const HOURLY_WINDOW: usize = 24;

const PROVIDER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_raw(&self, coordinates: Coordinates) -> Result<RawForecast, ForecastError>;
}

/// Source of the hour the hourly window starts at.
pub trait Clock: Send + Sync + Debug {
    /// Current wall-clock hour, 0-23.
    fn current_hour(&self) -> usize;
}

/// Server local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_hour(&self) -> usize {
        chrono::Local::now().hour() as usize
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedHour(pub usize);

impl Clock for FixedHour {
    fn current_hour(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrent {
    pub temperature_2m: f64,
    pub weather_code: i32,
    pub wind_speed_10m: f64,
    pub is_day: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDaily {
    pub time: Vec<String>,
    pub weather_code: Vec<i32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHourly {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
}

/// Provider payload, restricted to the fields the dashboard requests.
#[derive(Debug, Clone, Deserialize)]
pub struct RawForecast {
    pub current: RawCurrent,
    pub daily: RawDaily,
    pub hourly: RawHourly,
}

/// Fetch and normalize a forecast. Every failure is logged and becomes `None`.
pub async fn fetch_forecast(
    provider: &dyn ForecastProvider,
    clock: &dyn Clock,
    coordinates: Coordinates,
) -> Option<WeatherViewModel> {
    let result = match provider.fetch_raw(coordinates).await {
        Ok(raw) => normalize(raw, clock.current_hour()),
        Err(err) => Err(err),
    };

    match result {
        Ok(view) => Some(view),
        Err(err) => {
            tracing::error!(
                error = %err,
                lat = coordinates.lat,
                lon = coordinates.lon,
                "Forecast unavailable"
            );
            None
        }
    }
}

/// Reduce a raw forecast to the view-model, with the hourly window starting at `start_hour`.
pub fn normalize(raw: RawForecast, start_hour: usize) -> Result<WeatherViewModel, ForecastError> {
    let RawForecast {
        current,
        daily,
        hourly,
    } = raw;

    if hourly.time.len() != hourly.temperature_2m.len() {
        return Err(ForecastError::Shape(format!(
            "hourly series has {} timestamps but {} temperatures",
            hourly.time.len(),
            hourly.temperature_2m.len()
        )));
    }

    let hourly = hourly
        .time
        .iter()
        .zip(&hourly.temperature_2m)
        .skip(start_hour)
        .take(HOURLY_WINDOW)
        .map(|(time, temp)| {
            Ok(HourlyPoint {
                time: hour_label(time)?,
                temp: round_temperature(*temp),
            })
        })
        .collect::<Result<Vec<_>, ForecastError>>()?;

    Ok(WeatherViewModel {
        current: CurrentConditions {
            temperature: current.temperature_2m,
            wind_speed: current.wind_speed_10m,
            weather_code: current.weather_code,
            is_day: current.is_day != 0,
        },
        daily: DailyForecast {
            time: daily.time,
            weather_code: daily.weather_code,
            temperature_max: daily.temperature_2m_max,
            temperature_min: daily.temperature_2m_min,
        },
        hourly,
    })
}

/// "2026-10-14T15:00" -> "3 PM"
fn hour_label(timestamp: &str) -> Result<String, ForecastError> {
    let parsed = NaiveDateTime::parse_from_str(timestamp, PROVIDER_TIME_FORMAT)
        .map_err(|err| ForecastError::Shape(format!("bad hourly timestamp '{timestamp}': {err}")))?;

    Ok(parsed.format("%-I %p").to_string())
}
