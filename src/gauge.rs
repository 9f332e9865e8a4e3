//! Semicircular AQI gauge
//!
//! Angles are in degrees, measured counter-clockwise from 3 o'clock: 180° is
//! the left end of the dial and 0° the right end. Segments are laid out from
//! 180° toward 0°, the same direction the needle travels as AQI rises.

use crate::category::{AQI_SCALE_MAX, ColorToken};
use crate::error::{GaugeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Full sweep of the dial
pub const SWEEP_DEG: f64 = 180.0;

/// Fixed visual width of one band on the dial, in tenths of the sweep
///
/// These widths are a drawing choice and do not follow the band thresholds:
/// Good and Satisfactory each get a tenth although they cover 50 AQI points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeSegment {
    pub color: ColorToken,
    pub tenths: u8,
}

impl GaugeSegment {
    /// Share of the sweep, `0.0..=1.0`
    #[must_use]
    pub fn proportion(self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    /// Angular width before the gap is removed
    #[must_use]
    pub fn sweep_deg(self) -> f64 {
        f64::from(self.tenths) * SWEEP_DEG / 10.0
    }
}

pub const SEGMENTS: [GaugeSegment; 6] = [
    GaugeSegment { color: ColorToken::Green, tenths: 1 },
    GaugeSegment { color: ColorToken::Lime, tenths: 1 },
    GaugeSegment { color: ColorToken::Yellow, tenths: 2 },
    GaugeSegment { color: ColorToken::Orange, tenths: 2 },
    GaugeSegment { color: ColorToken::Red, tenths: 2 },
    GaugeSegment { color: ColorToken::Maroon, tenths: 2 },
];

/// Drawing parameters for the dial, in SVG user units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub stroke_width: f64,
    /// Degrees removed from the trailing edge of every segment
    pub gap_deg: f64,
    /// AQI value at the right end of the dial
    pub scale_max: f64,
    pub needle_length: f64,
    pub pivot_radius: f64,
    pub view_height: f64,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            center_x: 100.0,
            center_y: 100.0,
            radius: 85.0,
            stroke_width: 14.0,
            gap_deg: 3.0,
            scale_max: AQI_SCALE_MAX,
            needle_length: 70.0,
            pivot_radius: 6.0,
            view_height: 115.0,
        }
    }
}

impl GaugeConfig {
    /// Parse and validate a config
    ///
    /// # Errors
    ///
    /// * `GaugeError::InvalidPayload` - body is not a JSON object of this shape
    /// * `GaugeError::InvalidConfig` - see [`GaugeConfig::validate`]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// * `GaugeError::InvalidConfig` - `scale_max` or `radius` is not positive
    ///   and finite, or `gap_deg` is negative, non-finite, or wider than the
    ///   narrowest segment
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("scale_max", self.scale_max), ("radius", self.radius)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GaugeError::invalid_config(field, value));
            }
        }

        let narrowest = SEGMENTS
            .iter()
            .map(|s| s.sweep_deg())
            .fold(SWEEP_DEG, f64::min);
        if !(0.0..narrowest).contains(&self.gap_deg) {
            return Err(GaugeError::InvalidConfig(format!(
                "gap_deg must be in [0, {narrowest}), got {}",
                self.gap_deg
            )));
        }
        Ok(())
    }

    /// `scale_max`, or [`AQI_SCALE_MAX`] when it is not positive and finite
    #[must_use]
    pub fn scale_max(&self) -> f64 {
        if self.scale_max.is_finite() && self.scale_max > 0.0 {
            self.scale_max
        } else {
            AQI_SCALE_MAX
        }
    }

    /// Point on the dial circle at `deg`, with y growing downward
    #[must_use]
    pub fn point_at(&self, deg: f64) -> (f64, f64) {
        let rad = deg.to_radians();
        (
            self.center_x + self.radius * rad.cos(),
            self.center_y - self.radius * rad.sin(),
        )
    }

    /// Clamp `aqi` onto the dial. NaN pins to the left end.
    #[must_use]
    pub fn clamp(&self, aqi: f64) -> f64 {
        if aqi.is_nan() {
            0.0
        } else {
            aqi.clamp(0.0, self.scale_max())
        }
    }
}

/// One colored arc of a rendered gauge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcSegment {
    pub color: ColorToken,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl ArcSegment {
    #[must_use]
    pub fn start_point(&self, config: &GaugeConfig) -> (f64, f64) {
        config.point_at(self.start_deg)
    }

    #[must_use]
    pub fn end_point(&self, config: &GaugeConfig) -> (f64, f64) {
        config.point_at(self.end_deg)
    }

    /// SVG path data for the arc, drawn clockwise on screen
    #[must_use]
    pub fn svg_path(&self, config: &GaugeConfig) -> String {
        let (x1, y1) = self.start_point(config);
        let (x2, y2) = self.end_point(config);
        format!(
            "M {x1:.2} {y1:.2} A {r} {r} 0 0 1 {x2:.2} {y2:.2}",
            r = config.radius
        )
    }
}

/// Needle angle and arcs for one reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub angle_degrees: f64,
    pub segments: Vec<ArcSegment>,
}

impl Gauge {
    /// Rotation for a needle drawn pointing at 3 o'clock. Screen rotation is
    /// clockwise, so 0 AQI maps to -180 and the scale maximum to 0.
    #[must_use]
    pub fn needle_rotation(&self) -> f64 {
        self.angle_degrees - SWEEP_DEG
    }

    /// Standalone SVG document for the gauge
    #[must_use]
    pub fn render_svg(&self, config: &GaugeConfig) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}">"#,
            w = config.center_x * 2.0,
            h = config.view_height
        );
        for segment in &self.segments {
            let _ = writeln!(
                svg,
                r#"  <path d="{d}" fill="none" stroke="{color}" stroke-width="{sw}" stroke-linecap="round"/>"#,
                d = segment.svg_path(config),
                color = segment.color,
                sw = config.stroke_width
            );
        }

        let len = config.needle_length;
        let barb = len - 8.0;
        let _ = writeln!(
            svg,
            r#"  <g transform="translate({cx}, {cy}) rotate({rot:.2})">"#,
            cx = config.center_x,
            cy = config.center_y,
            rot = self.needle_rotation()
        );
        let _ = writeln!(
            svg,
            r##"    <path d="M 0 0 L {len} 0" stroke="#334155" stroke-width="3" stroke-linecap="round"/>"##
        );
        let _ = writeln!(
            svg,
            r##"    <path d="M {len} 0 L {barb} -4 L {barb} 4 Z" fill="#334155"/>"##
        );
        let _ = writeln!(
            svg,
            r##"    <circle cx="0" cy="0" r="{pr}" fill="#1e293b" stroke="white" stroke-width="2"/>"##,
            pr = config.pivot_radius
        );
        svg.push_str("  </g>\n</svg>\n");
        svg
    }
}

/// Render the gauge for `aqi` with the default dial
///
/// # Example
///
/// ```rust
/// use respi_gauge::render_gauge;
///
/// let gauge = render_gauge(250.0);
/// assert_eq!(gauge.angle_degrees, 90.0);
/// assert_eq!(gauge.segments.len(), 6);
/// ```
#[must_use]
pub fn render_gauge(aqi: f64) -> Gauge {
    render_gauge_with(aqi, &GaugeConfig::default())
}

/// Render the gauge for `aqi` on a custom dial
///
/// An unusable `scale_max` falls back to [`AQI_SCALE_MAX`]; use
/// [`GaugeConfig::validate`] to reject it instead.
#[must_use]
pub fn render_gauge_with(aqi: f64, config: &GaugeConfig) -> Gauge {
    let angle_degrees = config.clamp(aqi) / config.scale_max() * SWEEP_DEG;

    let mut elapsed_tenths = 0u8;
    let segments = SEGMENTS
        .iter()
        .map(|segment| {
            let start_deg = SWEEP_DEG - f64::from(elapsed_tenths) * SWEEP_DEG / 10.0;
            elapsed_tenths += segment.tenths;
            ArcSegment {
                color: segment.color,
                start_deg,
                end_deg: start_deg - segment.sweep_deg() + config.gap_deg,
            }
        })
        .collect();

    Gauge {
        angle_degrees,
        segments,
    }
}
