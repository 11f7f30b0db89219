//! Error types and handling for the forecast service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for the forecast service
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Bad or missing query parameters
    #[error("{message}")]
    Validation { message: String },

    /// Request used a method other than GET
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Network failure or non-200 answer from api.weather.gov
    #[error("{message}")]
    Transport { message: String },

    /// api.weather.gov answered with a body we could not decode
    #[error("{message}")]
    Parse { message: String },

    /// The forecast came back without a single period
    #[error("no forecast periods available")]
    NoPeriods,

    /// The report could not be encoded
    #[error("Failed to marshal forecast report: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stage failure, prefixed with what the handler was doing
    #[error("{context}: {source}")]
    Upstream {
        context: &'static str,
        #[source]
        source: Box<ForecastError>,
    },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ForecastError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap this error with the context of the step that produced it
    #[must_use]
    pub fn context(self, context: &'static str) -> Self {
        Self::Upstream {
            context,
            source: Box::new(self),
        }
    }

    /// HTTP status the error maps to when it reaches a client
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ForecastError::Validation { .. } => StatusCode::BAD_REQUEST,
            ForecastError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ForecastError::Transport { .. }
            | ForecastError::Parse { .. }
            | ForecastError::NoPeriods
            | ForecastError::Serialization(_)
            | ForecastError::Upstream { .. }
            | ForecastError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ForecastError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        } else {
            tracing::debug!("Request rejected: {self}");
        }
        (status, self.to_string()).into_response()
    }
}
