use serde::Serialize;

/// Condition categories mapped from WMO codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    Clear,
    PartlyCloudy,
    Fog,
    DrizzleRain,
    Snow,
    Showers,
    Thunderstorm,
    Unknown,
}

impl ConditionKind {
    /// Ranges are checked in table order; the first match wins. WMO codes stop
    /// at 99, so anything above that is unknown rather than a storm.
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1..=3 => Self::PartlyCloudy,
            45..=48 => Self::Fog,
            51..=67 => Self::DrizzleRain,
            71..=77 => Self::Snow,
            80..=82 => Self::Showers,
            95..=99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    pub const fn all() -> &'static [ConditionKind] {
        &[
            ConditionKind::Clear,
            ConditionKind::PartlyCloudy,
            ConditionKind::Fog,
            ConditionKind::DrizzleRain,
            ConditionKind::Snow,
            ConditionKind::Showers,
            ConditionKind::Thunderstorm,
            ConditionKind::Unknown,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear sky",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Fog => "Fog",
            Self::DrizzleRain => "Drizzle / Rain",
            Self::Snow => "Snow",
            Self::Showers => "Showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "Sun",
            Self::PartlyCloudy => "CloudSun",
            Self::Fog => "CloudFog",
            Self::DrizzleRain => "CloudRain",
            Self::Snow => "Snowflake",
            Self::Showers => "CloudRainWind",
            Self::Thunderstorm => "CloudLightning",
            Self::Unknown => "Cloud",
        }
    }
}

/// Display pair for a weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub label: &'static str,
    pub icon_name: &'static str,
}

impl From<ConditionKind> for Condition {
    fn from(kind: ConditionKind) -> Self {
        Self {
            label: kind.label(),
            icon_name: kind.icon_name(),
        }
    }
}

pub fn classify(code: i32) -> Condition {
    ConditionKind::from_wmo_code(code).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_codes() {
        assert_eq!(classify(0).label, "Clear sky");
        assert_eq!(classify(2).label, "Partly cloudy");
        assert_eq!(classify(61).label, "Drizzle / Rain");
        assert_eq!(classify(96).label, "Thunderstorm");
        assert_eq!(classify(999).label, "Unknown");
    }

    #[test]
    fn range_boundaries() {
        assert_eq!(ConditionKind::from_wmo_code(1), ConditionKind::PartlyCloudy);
        assert_eq!(ConditionKind::from_wmo_code(3), ConditionKind::PartlyCloudy);
        assert_eq!(ConditionKind::from_wmo_code(4), ConditionKind::Unknown);
        assert_eq!(ConditionKind::from_wmo_code(44), ConditionKind::Unknown);
        assert_eq!(ConditionKind::from_wmo_code(45), ConditionKind::Fog);
        assert_eq!(ConditionKind::from_wmo_code(48), ConditionKind::Fog);
        assert_eq!(ConditionKind::from_wmo_code(51), ConditionKind::DrizzleRain);
        assert_eq!(ConditionKind::from_wmo_code(67), ConditionKind::DrizzleRain);
        assert_eq!(ConditionKind::from_wmo_code(68), ConditionKind::Unknown);
        assert_eq!(ConditionKind::from_wmo_code(71), ConditionKind::Snow);
        assert_eq!(ConditionKind::from_wmo_code(77), ConditionKind::Snow);
        assert_eq!(ConditionKind::from_wmo_code(80), ConditionKind::Showers);
        assert_eq!(ConditionKind::from_wmo_code(82), ConditionKind::Showers);
        assert_eq!(ConditionKind::from_wmo_code(85), ConditionKind::Unknown);
        assert_eq!(ConditionKind::from_wmo_code(94), ConditionKind::Unknown);
        assert_eq!(ConditionKind::from_wmo_code(95), ConditionKind::Thunderstorm);
        assert_eq!(ConditionKind::from_wmo_code(99), ConditionKind::Thunderstorm);
        assert_eq!(ConditionKind::from_wmo_code(100), ConditionKind::Unknown);
    }

    #[test]
    fn unmatched_codes_fall_back_to_unknown_cloud() {
        for code in [-1, 10, 50, 70, 78, 90, 999, i32::MIN, i32::MAX] {
            let condition = classify(code);
            assert_eq!(condition.label, "Unknown");
            assert_eq!(condition.icon_name, "Cloud");
        }
    }

    #[test]
    fn every_code_maps_to_a_known_label() {
        let labels: Vec<&str> = ConditionKind::all().iter().map(ConditionKind::label).collect();
        for code in -10..=200 {
            assert!(labels.contains(&classify(code).label), "code {code}");
        }
        assert!(labels.contains(&classify(i32::MAX).label));
    }

    #[test]
    fn icon_names() {
        assert_eq!(classify(0).icon_name, "Sun");
        assert_eq!(classify(81).icon_name, "CloudRainWind");
        assert_eq!(classify(75).icon_name, "Snowflake");
    }
}
