//! Error types for payload parsing and checked readings

use serde_json::error::Category;
use thiserror::Error;

/// Result type alias for fallible gauge operations
pub type Result<T> = std::result::Result<T, GaugeError>;

/// Errors raised outside the total classification core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaugeError {
    /// AQI value is not a finite number
    #[error("Invalid AQI reading: {0}")]
    InvalidReading(String),

    /// Backend payload does not match the advisory shape
    #[error("Invalid advisory payload: {0}")]
    InvalidPayload(String),

    /// Missing required fields
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Gauge drawing parameters are out of range
    #[error("Invalid gauge config: {0}")]
    InvalidConfig(String),
}

impl GaugeError {
    /// Create a new `InvalidReading` error for a raw value
    #[must_use]
    pub fn invalid_reading(value: f64) -> Self {
        Self::InvalidReading(format!("{value} is not finite"))
    }

    /// Create a new `InvalidConfig` error for a specific field
    #[must_use]
    pub fn invalid_config(field: &str, value: f64) -> Self {
        Self::InvalidConfig(format!("{field} must be positive and finite, got {value}"))
    }
}

impl From<serde_json::Error> for GaugeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Eof => Self::InvalidPayload(format!("truncated body: {err}")),
            Category::Io | Category::Syntax | Category::Data => {
                Self::InvalidPayload(err.to_string())
            }
        }
    }
}
