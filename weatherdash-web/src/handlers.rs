use async_trait::async_trait;
use axum::{
    extract::{Extension, Query, RawQuery},
    http::HeaderMap,
    response::Redirect,
};
use maud::Markup;
use serde::Deserialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use weatherdash_core::{
    GeolocationSync, Geolocator, LocationError, Position, QueryNavigator, QueryState, RequestedLocation,
    fetch_forecast,
    geolocation::{LAT_PARAM, LON_PARAM},
};

use crate::{
    auth::session_from_headers,
    state::AppState,
    views::{self, dashboard::DashboardPage},
};

/// `GET /?lat=..&lon=..`
pub async fn dashboard_handler(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
) -> Markup {
    let Some(session) = session_from_headers(&headers, &state.auth) else {
        return views::sign_in_page();
    };

    let query = QueryState::parse(raw_query.as_deref().unwrap_or_default());
    let location = RequestedLocation::from_query(query.get(LAT_PARAM), query.get(LON_PARAM), &state.default_location);

    let weather = fetch_forecast(state.provider.as_ref(), state.clock.as_ref(), location.coordinates).await;
    let sync = GeolocationSync::new(query);

    views::dashboard::dashboard(&DashboardPage {
        session: &session,
        weather: weather.as_ref(),
        location: &location,
        indicator: sync.indicator(),
        debug_panel: state.debug_panel,
        today: chrono::Local::now().date_naive(),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    /// Query string of the page that requested the location.
    #[serde(rename = "return")]
    pub return_to: Option<String>,
}

/// Position reported by the browser's geolocation API.
struct ReportedPosition(Option<Position>);

impl ReportedPosition {
    fn from_params(params: &LocationParams) -> Self {
        let parse = |v: &Option<String>| v.as_deref().and_then(|s| s.parse::<f64>().ok()).filter(|f| f.is_finite());

        let position = parse(&params.latitude)
            .zip(parse(&params.longitude))
            .map(|(latitude, longitude)| Position { latitude, longitude });

        Self(position)
    }
}

#[async_trait]
impl Geolocator for ReportedPosition {
    async fn current_position(&self) -> Result<Position, LocationError> {
        self.0.ok_or(LocationError::Unavailable)
    }
}

/// Turns the requested replace-navigation into a redirect target.
#[derive(Default)]
struct RedirectNavigator {
    target: Option<String>,
}

impl QueryNavigator for RedirectNavigator {
    fn replace(&mut self, query: &QueryState) {
        self.target = Some(page_url(query));
    }
}

fn page_url(query: &QueryState) -> String {
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", query.to_query_string())
    }
}

/// `GET /location?latitude=..&longitude=..&return=..`
pub async fn location_handler(Query(params): Query<LocationParams>) -> Redirect {
    let reported = ReportedPosition::from_params(&params);
    let query = QueryState::parse(params.return_to.as_deref().unwrap_or_default());

    let mut sync = GeolocationSync::new(query);
    let mut navigator = RedirectNavigator::default();
    let cancel = CancellationToken::new();

    let outcome = sync.run(Some(&reported), &mut navigator, &cancel).await;
    debug!(?outcome, "Geolocation sync finished");

    let target = navigator.target.unwrap_or_else(|| page_url(sync.query()));
    Redirect::to(&target)
}

/// `POST /auth/signin`
pub async fn sign_in_handler(Extension(state): Extension<Arc<AppState>>) -> Redirect {
    let target = state.identity.sign_in_location("/");
    info!(provider = state.identity.name(), "Redirecting to identity provider");
    Redirect::to(&target)
}

/// `POST /auth/signout`
pub async fn sign_out_handler(Extension(state): Extension<Arc<AppState>>) -> Redirect {
    Redirect::to(&state.identity.sign_out_location())
}

pub async fn health_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_for_empty_query_is_root() {
        assert_eq!(page_url(&QueryState::default()), "/");
        assert_eq!(page_url(&QueryState::parse("lat=1&lon=2")), "/?lat=1&lon=2");
    }

    #[test]
    fn reported_position_requires_both_numbers() {
        let params = LocationParams {
            latitude: Some("40.7".into()),
            longitude: Some("abc".into()),
            return_to: None,
        };
        assert!(ReportedPosition::from_params(&params).0.is_none());

        let params = LocationParams {
            latitude: Some("40.7".into()),
            longitude: Some("-74".into()),
            return_to: None,
        };
        assert_eq!(
            ReportedPosition::from_params(&params).0,
            Some(Position {
                latitude: 40.7,
                longitude: -74.0
            })
        );
    }
}
