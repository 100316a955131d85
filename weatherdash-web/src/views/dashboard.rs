use chrono::NaiveDate;
use maud::{Markup, html};
use weatherdash_core::{
    LocationIndicator, RequestedLocation, Session, WeatherViewModel, classify,
    model::{DaySummary, round_temperature},
};

use super::{chart, icons, location, page};

/// Days shown in the forecast grid.
pub const FORECAST_CARDS: usize = 4;

/// Everything the dashboard renders from; the session is always present here.
#[derive(Debug)]
pub struct DashboardPage<'a> {
    pub session: &'a Session,
    pub weather: Option<&'a WeatherViewModel>,
    pub location: &'a RequestedLocation,
    pub indicator: Option<LocationIndicator>,
    pub debug_panel: bool,
    pub today: NaiveDate,
}

pub fn dashboard(ctx: &DashboardPage<'_>) -> Markup {
    page(
        "Weather Dash",
        html! {
            @if let Some(indicator) = ctx.indicator {
                (location::location_status(indicator))
            }
            (navbar(ctx.session))
            main {
                @if let Some(weather) = ctx.weather {
                    div.overview {
                        (current_card(weather, ctx.location, ctx.today))
                        div.days {
                            @for (index, day) in weather.daily.days(FORECAST_CARDS).enumerate() {
                                (day_card(&day, index == 0))
                            }
                        }
                    }
                    (chart::render(&weather.hourly))
                }
                @if ctx.debug_panel {
                    (debug_panel(ctx.session))
                }
            }
        },
    )
}

fn navbar(session: &Session) -> Markup {
    html! {
        nav {
            div.inner {
                div.brand {
                    (icons::cloud_sun(""))
                    span { "Weather Dash" }
                }
                div.user {
                    @if let Some(email) = &session.user.email {
                        span.muted { (email) }
                    }
                    form method="post" action="/auth/signout" {
                        button.btn-icon type="submit" title="Sign Out" { (icons::log_out("")) }
                    }
                }
            }
        }
    }
}

fn current_card(weather: &WeatherViewModel, location: &RequestedLocation, today: NaiveDate) -> Markup {
    let condition = classify(weather.current.weather_code);

    html! {
        section.card.current {
            div.backdrop { (icons::weather_icon(condition.icon_name, "")) }
            div {
                div.place {
                    (icons::map_pin(""))
                    span { (location.label()) }
                }
                div.muted { (today.format("%A, %B %-d").to_string()) }
            }
            div.temp {
                (round_temperature(weather.current.temperature))
                span.unit { "°C" }
            }
            div.meta {
                span.pill { (condition.label) }
                span.wind {
                    (icons::wind(""))
                    span { (weather.current.wind_speed) " km/h" }
                }
            }
        }
    }
}

fn day_card(day: &DaySummary<'_>, is_today: bool) -> Markup {
    let condition = classify(day.weather_code);
    let weekday = NaiveDate::parse_from_str(day.date, "%Y-%m-%d")
        .map(|d| d.format("%a").to_string())
        .unwrap_or_else(|_| day.date.to_string());

    html! {
        article.day.today[is_today] {
            header {
                span { (weekday) }
                (icons::weather_icon(condition.icon_name, ""))
            }
            div.range {
                div {
                    div.max { (round_temperature(day.temperature_max)) "°" }
                    small { "Max" }
                }
                div {
                    div.min { (round_temperature(day.temperature_min)) "°" }
                    small { "Min" }
                }
            }
        }
    }
}

fn debug_panel(session: &Session) -> Markup {
    let payload = serde_json::to_string_pretty(session).unwrap_or_default();

    html! {
        details.debug {
            summary {
                "Debug Information"
                span.badge { "Developer Only" }
            }
            @if let Some(token) = &session.access_token {
                div.block {
                    h4 { "Access Token" }
                    pre.token { (token) }
                }
            }
            div.block {
                h4 { "Session Payload" }
                pre.payload { (payload) }
            }
        }
    }
}
