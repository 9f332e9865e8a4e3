//! Location labels for the dashboard's location card

use crate::error::Result;
use serde::Deserialize;

/// Area name shown when reverse geocoding gives nothing usable
pub const UNKNOWN_AREA: &str = "Unknown Area";

/// Coordinates as shown under the location card, six decimal places
#[must_use]
pub fn format_coordinates(lat: f64, lon: f64) -> String {
    format!("{lat:.6}°N, {lon:.6}°E")
}

/// Subset of a client-side reverse-geocoding response
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocode {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub principal_subdivision: Option<String>,
}

impl ReverseGeocode {
    /// # Errors
    ///
    /// * `GaugeError::InvalidPayload` - body is not a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Most specific non-empty name: city, then locality, then subdivision
    #[must_use]
    pub fn area_name(&self) -> &str {
        [&self.city, &self.locality, &self.principal_subdivision]
            .into_iter()
            .flatten()
            .map(|name| name.trim())
            .find(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_AREA)
    }
}
