//! Data models for the forecast service
//!
//! - Location: validated input coordinates
//! - Forecast: resolved point URLs, the first forecast period and the
//!   report returned to clients

pub mod forecast;
pub mod location;

pub use forecast::{ForecastReport, ForecastUrls, ShortForecast};
pub use location::Coordinate;
