//! End-to-end tests: HTTP router -> NWS client -> mocked api.weather.gov

use axum::body::Body;
use axum::http::{Request, StatusCode};
use forecast_vibe::config::WeatherConfig;
use forecast_vibe::{AppState, ForecastReport, NationalWeatherService, web};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(mock_server: &MockServer) -> axum::Router {
    let config = WeatherConfig {
        base_url: format!("{}/", mock_server.uri()),
        user_agent: "forecast-vibe-test".to_string(),
        timeout_seconds: 5,
    };
    let service = NationalWeatherService::new(&config).unwrap();
    web::app(AppState::new(service))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn mount_points(mock_server: &MockServer, points_path: &str) {
    Mock::given(method("GET"))
        .and(path(points_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {
                "forecast": format!("{}/gridpoints/BOX/71,90/forecast", mock_server.uri()),
                "forecastHourly": format!("{}/gridpoints/BOX/71,90/forecast/hourly", mock_server.uri()),
                "forecastGridData": format!("{}/gridpoints/BOX/71,90", mock_server.uri()),
                "relativeLocation": {
                    "properties": { "city": "Boston", "state": "MA" },
                    "coordinates": [-71.06, 42.36]
                }
            }
        })))
        .expect(1)
        .mount(mock_server)
        .await;
}

/// Valid coordinates run both calls and report the first period
#[tokio::test]
async fn test_forecast_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_points(&mock_server, "/points/42.3601,-71.0589").await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/BOX/71,90/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": {
                "periods": [
                    {
                        "name": "This Afternoon",
                        "startTime": "2024-10-16T14:00:00-04:00",
                        "endTime": "2024-10-16T18:00:00-04:00",
                        "temperature": 58,
                        "temperatureUnit": "F",
                        "shortForecast": "Sunny"
                    },
                    {
                        "name": "Tonight",
                        "startTime": "2024-10-16T18:00:00-04:00",
                        "endTime": "2024-10-17T06:00:00-04:00",
                        "temperature": 30,
                        "temperatureUnit": "F",
                        "shortForecast": "Clear"
                    }
                ]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = get(
        app_for(&mock_server),
        "/api/v1/forecast?lat=42.3601&lon=-71.0589",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let report: ForecastReport = serde_json::from_str(&body).unwrap();
    assert_eq!(
        report,
        ForecastReport {
            latitude: 42.3601,
            longitude: -71.0589,
            name: "This Afternoon".to_string(),
            short_forecast: "Sunny".to_string(),
            temp_vibe: "perfect".to_string(),
        }
    );
}

/// An empty period list fails the request instead of returning a blank report
#[tokio::test]
async fn test_forecast_without_periods() {
    let mock_server = MockServer::start().await;
    mount_points(&mock_server, "/points/42.3601,-71.0589").await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/BOX/71,90/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "properties": { "periods": [] } })),
        )
        .mount(&mock_server)
        .await;

    let (status, body) = get(
        app_for(&mock_server),
        "/api/v1/forecast?lat=42.3601&lon=-71.0589",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Failed to forecast data: no forecast periods available");
}

/// A forecast body that is not valid JSON surfaces as 500 with context
#[tokio::test]
async fn test_forecast_malformed_body() {
    let mock_server = MockServer::start().await;
    mount_points(&mock_server, "/points/42.3601,-71.0589").await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/BOX/71,90/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&mock_server)
        .await;

    let (status, body) = get(
        app_for(&mock_server),
        "/api/v1/forecast?lat=42.3601&lon=-71.0589",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Failed to forecast data: failed to parse forecast response: "));
}

/// HEAD is rejected before any upstream call
#[tokio::test]
async fn test_head_forecast_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let response = app_for(&mock_server)
        .oneshot(
            Request::builder()
                .method("HEAD")
                .uri("/api/v1/forecast?lat=10&lon=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Upstream errors on the points call surface as 500 with context
#[tokio::test]
async fn test_points_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (status, body) = get(app_for(&mock_server), "/api/v1/forecast?lat=10&lon=10").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        "Failed to fetch weather data: failed to fetch weather data: received status code 500"
    );
}

/// Invalid input never reaches the weather API
#[tokio::test]
async fn test_invalid_input_makes_no_upstream_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (status, _) = get(app_for(&mock_server), "/api/v1/forecast?lat=91&lon=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(app_for(&mock_server), "/api/v1/forecast?lat=0&lon=181").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(app_for(&mock_server), "/api/v1/forecast?lat=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_endpoint() {
    let mock_server = MockServer::start().await;
    let (status, body) = get(app_for(&mock_server), "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Service is running");
}
