//! Coordinate model for geographic points

use serde::{Deserialize, Serialize};

use crate::{ForecastError, Result};

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude, -90 to 90 inclusive
    pub latitude: f64,
    /// Longitude, -180 to 180 inclusive
    pub longitude: f64,
}

impl Coordinate {
    /// Create a validated coordinate
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !Self::is_valid_latitude(latitude) {
            return Err(ForecastError::validation("Invalid latitude value"));
        }
        if !Self::is_valid_longitude(longitude) {
            return Err(ForecastError::validation("Invalid longitude value"));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse raw query values.
    ///
    /// Empty strings count as missing.
    pub fn parse(latitude: Option<&str>, longitude: Option<&str>) -> Result<Self> {
        let (Some(lat), Some(lon)) = (
            latitude.filter(|s| !s.is_empty()),
            longitude.filter(|s| !s.is_empty()),
        ) else {
            return Err(ForecastError::validation(
                "Missing latitude or longitude parameters",
            ));
        };

        let latitude = lat
            .parse::<f64>()
            .ok()
            .filter(|v| Self::is_valid_latitude(*v))
            .ok_or_else(|| ForecastError::validation("Invalid latitude value"))?;
        let longitude = lon
            .parse::<f64>()
            .ok()
            .filter(|v| Self::is_valid_longitude(*v))
            .ok_or_else(|| ForecastError::validation("Invalid longitude value"))?;

        Self::new(latitude, longitude)
    }

    /// Build from a GeoJSON `[lon, lat]` position.
    ///
    /// Returns `None` unless the slice holds exactly two values.
    #[must_use]
    pub fn from_lon_lat(position: &[f64]) -> Option<Self> {
        match position {
            [lon, lat] => Some(Self {
                latitude: *lat,
                longitude: *lon,
            }),
            _ => None,
        }
    }

    fn is_valid_latitude(value: f64) -> bool {
        (-90.0..=90.0).contains(&value)
    }

    fn is_valid_longitude(value: f64) -> bool {
        (-180.0..=180.0).contains(&value)
    }
}
