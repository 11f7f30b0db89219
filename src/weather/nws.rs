//! Wire types for api.weather.gov responses
//!
//! Only the fields the service reads are modelled. Anything the API does not
//! always send is an `Option`.

use serde::Deserialize;

/// `GET /points/{lat},{lon}`
#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointProperties {
    /// Daily (12 hour period) forecast URL
    pub forecast: String,
    pub forecast_hourly: String,
    pub forecast_grid_data: String,
    pub relative_location: RelativeLocation,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocation {
    pub properties: RelativeLocationProperties,
    /// GeoJSON position, `[lon, lat]`
    pub coordinates: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocationProperties {
    pub city: String,
    pub state: String,
}

/// `GET {forecast url}`
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<Period>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub temperature: i32,
    pub temperature_unit: String,
    pub short_forecast: String,
}
