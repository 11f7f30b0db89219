//! Forecast models: resolved point URLs, the first forecast period and the
//! report handed back to clients

use serde::{Deserialize, Serialize};

use super::Coordinate;
use crate::vibe::temp_vibe;

/// Forecast endpoints resolved for a point
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastUrls {
    pub city: String,
    pub state: String,
    /// The points URL that was requested
    pub point: String,
    /// Grid point coordinate, or the input coordinate when the API gave none
    pub coordinate: Coordinate,
    pub daily: String,
    pub hourly: String,
    pub grid_data: String,
}

/// First period of a daily forecast
#[derive(Debug, Clone, PartialEq)]
pub struct ShortForecast {
    pub coordinate: Coordinate,
    /// Period name, e.g. "Tonight"
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub temperature: i32,
    /// "F", "C" or whatever the API sent
    pub temperature_unit: String,
    pub short_forecast: String,
}

/// Response body of `GET /api/v1/forecast`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastReport {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub short_forecast: String,
    pub temp_vibe: String,
}

impl ForecastReport {
    /// Build a report for the coordinate the client asked about
    #[must_use]
    pub fn new(requested: Coordinate, forecast: &ShortForecast) -> Self {
        Self {
            latitude: requested.latitude,
            longitude: requested.longitude,
            name: forecast.name.clone(),
            short_forecast: forecast.short_forecast.clone(),
            temp_vibe: temp_vibe(forecast.temperature, &forecast.temperature_unit).to_string(),
        }
    }
}
