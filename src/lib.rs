//! `forecast-vibe` - short National Weather Service forecasts with a vibe
//!
//! Resolves a latitude/longitude to its NWS grid point, fetches the first
//! daily forecast period and labels its temperature.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod vibe;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::ServiceConfig;
pub use error::ForecastError;
pub use models::{Coordinate, ForecastReport, ForecastUrls, ShortForecast};
pub use vibe::{TempVibe, temp_vibe};
pub use weather::{ForecastProvider, NationalWeatherService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ForecastError>;
