//! Integration tests for OpenMeteoProvider using wiremock.

use weatherdash_core::{
    Coordinates, ForecastError, ForecastProvider,
    provider::{FixedHour, OpenMeteoProvider, fetch_forecast},
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body(hours: usize) -> serde_json::Value {
    let time: Vec<String> = (0..hours)
        .map(|i| format!("2026-10-{:02}T{:02}:00", 14 + i / 24, i % 24))
        .collect();
    let temps: Vec<f64> = (0..hours).map(|i| 25.0 + (i % 12) as f64 * 0.5).collect();

    serde_json::json!({
        "latitude": 13.75,
        "longitude": 100.5,
        "timezone": "Asia/Bangkok",
        "current": {
            "time": "2026-10-14T10:00",
            "interval": 900,
            "temperature_2m": 28.6,
            "weather_code": 2,
            "wind_speed_10m": 7.9,
            "is_day": 1
        },
        "daily": {
            "time": ["2026-10-14", "2026-10-15", "2026-10-16"],
            "weather_code": [2, 80, 95],
            "temperature_2m_max": [33.1, 32.4, 31.0],
            "temperature_2m_min": [25.2, 24.8, 24.5]
        },
        "hourly": {
            "time": time,
            "temperature_2m": temps
        }
    })
}

#[tokio::test]
async fn sends_expected_query_and_normalizes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "13.7563"))
        .and(query_param("longitude", "100.5018"))
        .and(query_param("current", "temperature_2m,weather_code,wind_speed_10m,is_day"))
        .and(query_param("daily", "weather_code,temperature_2m_max,temperature_2m_min"))
        .and(query_param("hourly", "temperature_2m"))
        .and(query_param("timezone", "auto"))
        .and(query_param("forecast_days", "3"))
        .and(header("cache-control", "max-age=3600"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(30)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OpenMeteoProvider::new(mock_server.uri()).unwrap();
    let view = fetch_forecast(&provider, &FixedHour(10), Coordinates::new(13.7563, 100.5018))
        .await
        .expect("forecast should be present");

    assert_eq!(view.current.temperature, 28.6);
    assert_eq!(view.current.wind_speed, 7.9);
    assert!(view.current.is_day);
    assert_eq!(view.daily.weather_code, vec![2, 80, 95]);
    assert_eq!(view.hourly.len(), 20);
    assert_eq!(view.hourly[0].time, "10 AM");
    // source index 10: 25.0 + 10 * 0.5
    assert_eq!(view.hourly[0].temp, 30);
}

#[tokio::test]
async fn full_three_day_payload_yields_24_hours() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(72)))
        .mount(&mock_server)
        .await;

    let provider = OpenMeteoProvider::new(mock_server.uri()).unwrap();
    let view = fetch_forecast(&provider, &FixedHour(23), Coordinates::new(0.0, 0.0))
        .await
        .unwrap();

    assert_eq!(view.hourly.len(), 24);
    assert_eq!(view.hourly[0].time, "11 PM");
    assert_eq!(view.hourly[1].time, "12 AM");
}

#[tokio::test]
async fn server_error_surfaces_as_status_from_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let provider = OpenMeteoProvider::new(mock_server.uri()).unwrap();
    let err = provider.fetch_raw(Coordinates::new(0.0, 0.0)).await.unwrap_err();

    match err {
        ForecastError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Too many requests"
        })))
        .mount(&mock_server)
        .await;

    let provider = OpenMeteoProvider::new(mock_server.uri()).unwrap();
    let view = fetch_forecast(&provider, &FixedHour(0), Coordinates::new(0.0, 0.0)).await;

    assert!(view.is_none());
}

#[tokio::test]
async fn malformed_json_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"current\": {"))
        .mount(&mock_server)
        .await;

    let provider = OpenMeteoProvider::new(mock_server.uri()).unwrap();

    let err = provider.fetch_raw(Coordinates::new(0.0, 0.0)).await.unwrap_err();
    assert!(matches!(err, ForecastError::Parse(_)));

    let view = fetch_forecast(&provider, &FixedHour(0), Coordinates::new(0.0, 0.0)).await;
    assert!(view.is_none());
}

#[tokio::test]
async fn missing_fields_yield_none() {
    let mock_server = MockServer::start().await;

    let mut body = forecast_body(24);
    body.as_object_mut().unwrap().remove("daily");

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let provider = OpenMeteoProvider::new(mock_server.uri()).unwrap();
    let view = fetch_forecast(&provider, &FixedHour(0), Coordinates::new(0.0, 0.0)).await;

    assert!(view.is_none());
}

#[tokio::test]
async fn connection_refused_yields_none() {
    // Bind then drop a listener to get a port nothing is serving on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = OpenMeteoProvider::new(format!("http://{addr}")).unwrap();

    let err = provider.fetch_raw(Coordinates::new(0.0, 0.0)).await.unwrap_err();
    assert!(matches!(err, ForecastError::Network(_)));

    let view = fetch_forecast(&provider, &FixedHour(0), Coordinates::new(0.0, 0.0)).await;
    assert!(view.is_none());
}
