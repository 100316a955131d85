//! Inline SVG icons (Lucide outlines).

use maud::{Markup, html};

const SUN: &[&str] = &[
    "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
    "M12 2v2",
    "M12 20v2",
    "m4.93 4.93 1.41 1.41",
    "m17.66 17.66 1.41 1.41",
    "M2 12h2",
    "M20 12h2",
    "m6.34 17.66-1.41 1.41",
    "m19.07 4.93-1.41 1.41",
];
const CLOUD: &[&str] = &["M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"];
const CLOUD_SUN: &[&str] = &[
    "M12 2v2",
    "m4.93 4.93 1.41 1.41",
    "M20 12h2",
    "m19.07 4.93-1.41 1.41",
    "M15.947 12.65a4 4 0 0 0-5.925-4.128",
    "M13 22H7a5 5 0 1 1 4.9-6H13a3 3 0 0 1 0 6Z",
];
const CLOUD_FOG: &[&str] = &[
    "M4 14.899A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 2.5 8.242",
    "M16 17H7",
    "M17 21H9",
];
const CLOUD_RAIN: &[&str] = &[
    "M4 14.899A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 2.5 8.242",
    "M16 14v6",
    "M8 14v6",
    "M12 16v6",
];
const SNOWFLAKE: &[&str] = &[
    "M2 12h20",
    "M12 2v20",
    "m20 16-4-4 4-4",
    "m4 8 4 4-4 4",
    "m16 4-4 4-4-4",
    "m8 20 4-4 4 4",
];
const CLOUD_LIGHTNING: &[&str] = &[
    "M6 16.326A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 .5 8.973",
    "m13 12-3 5h4l-3 5",
];
const WIND: &[&str] = &[
    "M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2",
    "M9.6 4.6A2 2 0 1 1 11 8H2",
    "M12.6 19.4A2 2 0 1 0 14 16H2",
];
const MAP_PIN: &[&str] = &[
    "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
    "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
];
const LOG_OUT: &[&str] = &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "m16 17 5-5-5-5", "M21 12H9"];

fn svg(class: &str, paths: &[&str]) -> Markup {
    html! {
        svg class={ "icon " (class) } xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            @for d in paths {
                path d=(d) {}
            }
        }
    }
}

/// Icon for a condition's `icon_name`; anything unrecognized draws a plain cloud.
pub fn weather_icon(name: &str, class: &str) -> Markup {
    let paths = match name {
        "Sun" => SUN,
        "CloudSun" => CLOUD_SUN,
        "CloudFog" => CLOUD_FOG,
        "CloudRain" | "CloudRainWind" => CLOUD_RAIN,
        "Snowflake" => SNOWFLAKE,
        "CloudLightning" => CLOUD_LIGHTNING,
        _ => CLOUD,
    };
    svg(class, paths)
}

pub fn cloud_sun(class: &str) -> Markup {
    svg(class, CLOUD_SUN)
}

pub fn wind(class: &str) -> Markup {
    svg(class, WIND)
}

pub fn map_pin(class: &str) -> Markup {
    svg(class, MAP_PIN)
}

pub fn log_out(class: &str) -> Markup {
    svg(class, LOG_OUT)
}
