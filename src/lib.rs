//! Respi-Guard AQI gauge
//!
//! Pure functions behind the dashboard's air quality panel, on the Indian
//! national (CPCB) AQI scale:
//! - [`classify`] a reading into one of six bands
//! - [`color_for`] the band's display color
//! - [`reaction_for`] the three-way reaction image
//! - [`render_gauge`] the needle angle and colored arcs of the 180° dial
//!
//! # Example
//!
//! ```rust
//! use respi_gauge::{Category, ColorToken, ReactionImage, classify, color_for, reaction_for};
//!
//! assert_eq!(classify(101.0), Category::Moderate);
//! assert_eq!(color_for(101.0), ColorToken::Yellow);
//! assert_eq!(reaction_for(101.0), ReactionImage::Mask);
//! ```
//!
//! The [`advisory`], [`location`] and [`dashboard`] modules turn backend
//! payloads into the values the dashboard draws.

pub mod advisory;
pub mod category;
pub mod dashboard;
pub mod error;
pub mod gauge;
pub mod location;
pub mod reaction;

pub use advisory::{Activity, ActivityIcon, Advisory, AdvisoryResponse, AirQuality, StatusColor};
pub use category::{AqiReading, Category, ColorToken, classify, color_for};
pub use dashboard::{ActivityCard, DashboardView};
pub use error::{GaugeError, Result};
pub use gauge::{ArcSegment, Gauge, GaugeConfig, render_gauge, render_gauge_with};
pub use location::{ReverseGeocode, format_coordinates};
pub use reaction::{ReactionImage, reaction_for};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_scenario() {
        assert_eq!(classify(50.0).label(), "Good");
        assert_eq!(classify(51.0).label(), "Satisfactory");
        assert_eq!(classify(100.0).label(), "Satisfactory");
        assert_eq!(classify(101.0).label(), "Moderate");
        assert_eq!(classify(450.0).label(), "Severe");

        assert_eq!(render_gauge(0.0).angle_degrees, 0.0);
        assert_eq!(render_gauge(250.0).angle_degrees, 90.0);
        assert_eq!(render_gauge(500.0).angle_degrees, 180.0);
    }

    #[test]
    fn operations_agree_for_integer_readings() {
        for aqi in (-50..=600).map(f64::from) {
            let category = classify(aqi);
            assert_eq!(category.color(), color_for(aqi));
            if category == Category::Good {
                assert_eq!(reaction_for(aqi), ReactionImage::Happy);
            }
            if aqi > 400.0 {
                assert_eq!(color_for(aqi), ColorToken::Maroon);
            }
        }
    }
}
