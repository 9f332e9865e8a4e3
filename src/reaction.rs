//! Reaction image shown next to the gauge
//!
//! Three buckets instead of six bands: the image is a coarse cue, so every
//! reading from 51 through 300 shows the same masked figure.

use crate::category::band_for;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionImage {
    Happy,
    Mask,
    Panic,
}

impl ReactionImage {
    /// Public asset path served by the dashboard
    #[must_use]
    pub fn asset_path(self) -> &'static str {
        match self {
            Self::Happy => "/man-happy.png",
            Self::Mask => "/man-mask.png",
            Self::Panic => "/man-panic.png",
        }
    }
}

/// Reaction for an AQI value. NaN is treated like an off-scale reading.
#[must_use]
pub fn reaction_for(aqi: f64) -> ReactionImage {
    band_for(aqi).reaction
}
