//! Indian national AQI bands (CPCB scale)
//!
//! Every band lookup goes through [`BANDS`], so [`classify`], [`color_for`]
//! and [`reaction_for`](crate::reaction::reaction_for) always agree on where
//! one band ends and the next begins.

use crate::error::{GaugeError, Result};
use crate::reaction::ReactionImage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper display bound of the scale; raw readings may exceed it
pub const AQI_SCALE_MAX: f64 = 500.0;

/// Severity category of an AQI reading, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Severe,
}

impl Category {
    /// All categories in band order
    pub const ALL: [Self; 6] = [
        Self::Good,
        Self::Satisfactory,
        Self::Moderate,
        Self::Poor,
        Self::VeryPoor,
        Self::Severe,
    ];

    /// Display label, e.g. `"Very Poor"`
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
            Self::Severe => "Severe",
        }
    }

    /// Inclusive upper threshold; `f64::INFINITY` for `Severe`
    #[must_use]
    pub fn upper_bound(self) -> f64 {
        self.band().upper
    }

    /// Display color of the band
    #[must_use]
    pub fn color(self) -> ColorToken {
        self.band().color
    }

    #[must_use]
    pub fn reaction(self) -> ReactionImage {
        self.band().reaction
    }

    fn band(self) -> &'static Band {
        &BANDS[self as usize]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One display color per band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Green,
    Lime,
    Yellow,
    Orange,
    Red,
    Maroon,
}

impl ColorToken {
    /// Hex color used when drawing, `#RRGGBB`
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Green => "#10B981",
            Self::Lime => "#84CC16",
            Self::Yellow => "#EAB308",
            Self::Orange => "#F97316",
            Self::Red => "#EF4444",
            Self::Maroon => "#7F1D1D",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// A band of the scale: everything `<= upper` not claimed by an earlier band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub upper: f64,
    pub category: Category,
    pub color: ColorToken,
    pub reaction: ReactionImage,
}

/// Band table sorted by upper bound, searched first-match
///
/// The reaction column is coarser than the bands: Satisfactory through Poor
/// all share the masked figure.
#[rustfmt::skip]
pub const BANDS: [Band; 6] = [
    Band { upper: 50.0, category: Category::Good, color: ColorToken::Green, reaction: ReactionImage::Happy },
    Band { upper: 100.0, category: Category::Satisfactory, color: ColorToken::Lime, reaction: ReactionImage::Mask },
    Band { upper: 200.0, category: Category::Moderate, color: ColorToken::Yellow, reaction: ReactionImage::Mask },
    Band { upper: 300.0, category: Category::Poor, color: ColorToken::Orange, reaction: ReactionImage::Mask },
    Band { upper: 400.0, category: Category::VeryPoor, color: ColorToken::Red, reaction: ReactionImage::Panic },
    Band { upper: f64::INFINITY, category: Category::Severe, color: ColorToken::Maroon, reaction: ReactionImage::Panic },
];

/// Band containing `aqi`. NaN matches no bound and lands in the last band.
#[must_use]
pub fn band_for(aqi: f64) -> &'static Band {
    let last = &BANDS[BANDS.len() - 1];
    BANDS.iter().find(|band| aqi <= band.upper).unwrap_or(last)
}

/// Classify an AQI value into its band. Negative values are `Good`.
#[must_use]
pub fn classify(aqi: f64) -> Category {
    band_for(aqi).category
}

/// Display color for an AQI value, using the same bands as [`classify`]
#[must_use]
pub fn color_for(aqi: f64) -> ColorToken {
    band_for(aqi).color
}

/// A finite AQI reading
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct AqiReading(f64);

impl AqiReading {
    /// Wrap a raw value, rejecting NaN and infinities
    ///
    /// # Errors
    ///
    /// * `GaugeError::InvalidReading` - value is not finite
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(GaugeError::invalid_reading(value))
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Value limited to `[0, AQI_SCALE_MAX]`
    #[must_use]
    pub fn clamped(self) -> f64 {
        self.0.clamp(0.0, AQI_SCALE_MAX)
    }

    #[must_use]
    pub fn category(self) -> Category {
        classify(self.0)
    }
}

impl From<u16> for AqiReading {
    fn from(value: u16) -> Self {
        Self(f64::from(value))
    }
}

impl TryFrom<f64> for AqiReading {
    type Error = GaugeError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-25.0, Category::Good)]
    #[case(0.0, Category::Good)]
    #[case(50.0, Category::Good)]
    #[case(50.5, Category::Satisfactory)]
    #[case(51.0, Category::Satisfactory)]
    #[case(100.0, Category::Satisfactory)]
    #[case(101.0, Category::Moderate)]
    #[case(200.0, Category::Moderate)]
    #[case(201.0, Category::Poor)]
    #[case(300.0, Category::Poor)]
    #[case(301.0, Category::VeryPoor)]
    #[case(400.0, Category::VeryPoor)]
    #[case(400.01, Category::Severe)]
    #[case(450.0, Category::Severe)]
    #[case(9999.0, Category::Severe)]
    fn classify_bands(#[case] aqi: f64, #[case] expected: Category) {
        assert_eq!(classify(aqi), expected, "classify({aqi})");
    }

    #[test]
    fn classify_labels() {
        assert_eq!(classify(50.0).to_string(), "Good");
        assert_eq!(classify(51.0).to_string(), "Satisfactory");
        assert_eq!(classify(100.0).to_string(), "Satisfactory");
        assert_eq!(classify(101.0).to_string(), "Moderate");
        assert_eq!(classify(450.0).to_string(), "Severe");
    }

    #[test]
    fn good_range_is_green() {
        for aqi in [-500.0, -0.5, 0.0, 12.0, 49.99, 50.0] {
            assert_eq!(classify(aqi), Category::Good);
            assert_eq!(color_for(aqi), ColorToken::Green);
        }
    }

    #[test]
    fn above_400_is_maroon() {
        for aqi in [400.001, 401.0, 500.0, 1e6, f64::INFINITY] {
            assert_eq!(classify(aqi), Category::Severe);
            assert_eq!(color_for(aqi), ColorToken::Maroon);
        }
    }

    #[test]
    fn classify_and_color_agree_across_boundaries() {
        // Sweep the whole scale in quarter steps, plus each boundary's neighbours
        let sweep = (-40..=2400).map(|q| f64::from(q) / 4.0);
        let edges = [50.0, 100.0, 200.0, 300.0, 400.0]
            .into_iter()
            .flat_map(|b: f64| [b.next_down(), b, b.next_up()]);

        for aqi in sweep.chain(edges) {
            assert_eq!(
                classify(aqi).color(),
                color_for(aqi),
                "classify and color_for disagree at {aqi}"
            );
        }
    }

    #[test]
    fn boundary_belongs_to_lower_band() {
        for pair in Category::ALL.windows(2) {
            let bound = pair[0].upper_bound();
            assert_eq!(classify(bound), pair[0]);
            assert_eq!(classify(bound.next_up()), pair[1]);
        }
    }

    #[test]
    fn band_table_is_sorted_and_indexed_by_category() {
        for (index, band) in BANDS.iter().enumerate() {
            assert_eq!(band.category as usize, index);
        }
        assert!(BANDS.windows(2).all(|w| w[0].upper < w[1].upper));
    }

    #[test]
    fn nan_falls_through_to_severe() {
        assert_eq!(classify(f64::NAN), Category::Severe);
        assert_eq!(color_for(f64::NAN), ColorToken::Maroon);
    }

    #[test]
    fn reading_rejects_non_finite() {
        assert!(AqiReading::new(f64::NAN).is_err());
        assert!(AqiReading::try_from(f64::NEG_INFINITY).is_err());

        let reading = AqiReading::new(612.0).unwrap();
        assert_eq!(reading.value(), 612.0);
        assert_eq!(reading.clamped(), AQI_SCALE_MAX);
        assert_eq!(reading.category(), Category::Severe);
        assert_eq!(AqiReading::from(42u16).category(), Category::Good);
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&Category::VeryPoor).unwrap(),
            "\"Very Poor\""
        );
        assert_eq!(serde_json::to_string(&ColorToken::Lime).unwrap(), "\"lime\"");
        assert_eq!(ColorToken::Maroon.to_string(), "#7F1D1D");
    }
}
