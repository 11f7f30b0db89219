//! National Weather Service client
//!
//! A forecast lookup is two sequential calls: the points endpoint resolves a
//! coordinate to its grid forecast URLs, then the daily forecast URL yields
//! the periods. Each call is attempted once.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument};

use crate::config::WeatherConfig;
use crate::models::{Coordinate, ForecastUrls, ShortForecast};
use crate::{ForecastError, Result};

pub mod nws;

/// Source of short forecasts for a coordinate
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Resolve a coordinate to the forecast endpoints of its grid point
    async fn resolve_point(&self, coordinate: Coordinate) -> Result<ForecastUrls>;

    /// Fetch the first period of the daily forecast
    async fn fetch_short_forecast(&self, urls: &ForecastUrls) -> Result<ShortForecast>;
}

/// api.weather.gov client
#[derive(Debug, Clone)]
pub struct NationalWeatherService {
    client: Client,
    base_url: String,
}

impl NationalWeatherService {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ForecastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// URL of the points endpoint for `coordinate`
    #[must_use]
    pub fn points_url(&self, coordinate: Coordinate) -> String {
        format!(
            "{}points/{},{}",
            self.base_url, coordinate.latitude, coordinate.longitude
        )
    }

    /// GET `url` and return the body of a 200 answer
    async fn fetch_text(&self, url: &str, fetch_context: &str, read_context: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ForecastError::transport(format!("{fetch_context}: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ForecastError::transport(format!(
                "{fetch_context}: received status code {}",
                status.as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ForecastError::transport(format!("{read_context}: {e}")))
    }
}

#[async_trait]
impl ForecastProvider for NationalWeatherService {
    #[instrument(skip(self))]
    async fn resolve_point(&self, coordinate: Coordinate) -> Result<ForecastUrls> {
        let point = self.points_url(coordinate);
        debug!("Requesting points: {}", point);

        let body = self
            .fetch_text(
                &point,
                "failed to fetch weather data",
                "failed to read response body",
            )
            .await?;

        let points: nws::PointsResponse = serde_json::from_str(&body)
            .map_err(|e| ForecastError::parse(format!("failed to parse points response: {e}")))?;
        debug!("Points response: {:?}", points);

        let properties = points.properties;
        let location = properties.relative_location;
        let resolved = location
            .coordinates
            .as_deref()
            .and_then(Coordinate::from_lon_lat)
            .unwrap_or(coordinate);

        info!(
            "Resolved point to {}, {} ({}, {})",
            location.properties.city,
            location.properties.state,
            resolved.latitude,
            resolved.longitude
        );

        Ok(ForecastUrls {
            city: location.properties.city,
            state: location.properties.state,
            point,
            coordinate: resolved,
            daily: properties.forecast,
            hourly: properties.forecast_hourly,
            grid_data: properties.forecast_grid_data,
        })
    }

    #[instrument(skip(self, urls), fields(url = %urls.daily))]
    async fn fetch_short_forecast(&self, urls: &ForecastUrls) -> Result<ShortForecast> {
        let body = self
            .fetch_text(
                &urls.daily,
                "failed to fetch forecast data",
                "failed to read forecast response body",
            )
            .await?;

        let forecast: nws::ForecastResponse = serde_json::from_str(&body)
            .map_err(|e| ForecastError::parse(format!("failed to parse forecast response: {e}")))?;

        let period = forecast
            .properties
            .periods
            .into_iter()
            .next()
            .ok_or(ForecastError::NoPeriods)?;

        debug!(
            "First period: {} {}{} {}",
            period.name, period.temperature, period.temperature_unit, period.short_forecast
        );

        Ok(ShortForecast {
            coordinate: urls.coordinate,
            name: period.name,
            start_time: period.start_time,
            end_time: period.end_time,
            temperature: period.temperature,
            temperature_unit: period.temperature_unit,
            short_forecast: period.short_forecast,
        })
    }
}
