use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::{
    ForecastError, Result,
    models::{Coordinate, ForecastReport},
    weather::ForecastProvider,
};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ForecastProvider>,
}

impl AppState {
    pub fn new(provider: impl ForecastProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

/// Raw query string; validation happens in the handler so that missing and
/// malformed values get distinct messages.
#[derive(Debug, Deserialize)]
struct ForecastQuery {
    lat: Option<String>,
    lon: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/forecast",
            get(get_forecast)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Result<Response> {
    // Nothing limits how often we hit api.weather.gov; each request costs two calls.
    let requested = Coordinate::parse(query.lat.as_deref(), query.lon.as_deref())?;

    let urls = state
        .provider
        .resolve_point(requested)
        .await
        .map_err(|e| e.context("Failed to fetch weather data"))?;

    let forecast = state
        .provider
        .fetch_short_forecast(&urls)
        .await
        .map_err(|e| e.context("Failed to forecast data"))?;

    let report = ForecastReport::new(requested, &forecast);
    let body = serde_json::to_vec(&report)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

async fn method_not_allowed() -> ForecastError {
    ForecastError::MethodNotAllowed
}
