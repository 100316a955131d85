use serde::{Deserialize, Serialize};

use crate::config::LocationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Coordinates chosen for one page view, plus whether they came from config.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestedLocation {
    pub coordinates: Coordinates,
    pub is_default: bool,
    default_label: String,
}

impl RequestedLocation {
    /// Both values must be present and numeric, otherwise the configured
    /// default location is used for the pair.
    pub fn from_query(lat: Option<&str>, lon: Option<&str>, default: &LocationConfig) -> Self {
        let parsed = lat
            .and_then(parse_coordinate)
            .zip(lon.and_then(parse_coordinate));

        match parsed {
            Some((lat, lon)) => Self {
                coordinates: Coordinates::new(lat, lon),
                is_default: false,
                default_label: default.label.clone(),
            },
            None => Self {
                coordinates: default.coordinates(),
                is_default: true,
                default_label: default.label.clone(),
            },
        }
    }

    pub fn label(&self) -> String {
        if self.is_default {
            self.default_label.clone()
        } else {
            format!("Lat: {}, Lon: {}", self.coordinates.lat, self.coordinates.lon)
        }
    }
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: f64,
    pub wind_speed: f64,
    pub weather_code: i32,
    pub is_day: bool,
}

/// Parallel per-day arrays as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub time: Vec<String>,
    pub weather_code: Vec<i32>,
    pub temperature_max: Vec<f64>,
    pub temperature_min: Vec<f64>,
}

/// One row of [`DailyForecast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySummary<'a> {
    pub date: &'a str,
    pub weather_code: i32,
    pub temperature_max: f64,
    pub temperature_min: f64,
}

impl DailyForecast {
    /// First `limit` days; stops at the shortest array.
    pub fn days(&self, limit: usize) -> impl Iterator<Item = DaySummary<'_>> {
        self.time
            .iter()
            .zip(&self.weather_code)
            .zip(self.temperature_max.iter().zip(&self.temperature_min))
            .take(limit)
            .map(|((date, code), (max, min))| DaySummary {
                date: date.as_str(),
                weather_code: *code,
                temperature_max: *max,
                temperature_min: *min,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyPoint {
    pub time: String,
    pub temp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherViewModel {
    pub current: CurrentConditions,
    pub daily: DailyForecast,
    pub hourly: Vec<HourlyPoint>,
}

/// Nearest whole degree, halves toward positive infinity.
pub fn round_temperature(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bangkok() -> LocationConfig {
        LocationConfig::default()
    }

    #[test]
    fn both_params_are_used_verbatim() {
        let loc = RequestedLocation::from_query(Some("40.7129"), Some("-74.006"), &bangkok());
        assert!(!loc.is_default);
        assert_eq!(loc.coordinates, Coordinates::new(40.7129, -74.006));
        assert_eq!(loc.label(), "Lat: 40.7129, Lon: -74.006");
    }

    #[test]
    fn missing_param_falls_back_to_default() {
        for (lat, lon) in [(Some("40.7"), None), (None, Some("-74.0")), (None, None)] {
            let loc = RequestedLocation::from_query(lat, lon, &bangkok());
            assert!(loc.is_default);
            assert_eq!(loc.coordinates, Coordinates::new(13.7563, 100.5018));
            assert_eq!(loc.label(), "Bangkok, Thailand");
        }
    }

    #[test]
    fn unparseable_param_falls_back_to_default() {
        let loc = RequestedLocation::from_query(Some("north"), Some("100"), &bangkok());
        assert!(loc.is_default);

        let loc = RequestedLocation::from_query(Some("NaN"), Some("100"), &bangkok());
        assert!(loc.is_default);
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(round_temperature(28.6), 29);
        assert_eq!(round_temperature(28.5), 29);
        assert_eq!(round_temperature(28.49), 28);
        assert_eq!(round_temperature(-2.5), -2);
        assert_eq!(round_temperature(-2.6), -3);
    }

    #[test]
    fn days_stop_at_shortest_array() {
        let daily = DailyForecast {
            time: vec!["2026-10-14".into(), "2026-10-15".into(), "2026-10-16".into()],
            weather_code: vec![0, 3],
            temperature_max: vec![31.0, 30.0, 29.0],
            temperature_min: vec![24.0, 23.0, 22.0],
        };

        let days: Vec<_> = daily.days(4).collect();
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].date, "2026-10-15");
        assert_eq!(days[1].weather_code, 3);
    }
}
