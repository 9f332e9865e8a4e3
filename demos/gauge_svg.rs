//! Writes the gauge for one reading as SVG to stdout
//!
//! Run with: cargo run --example gauge_svg -- 230

use respi_gauge::{GaugeConfig, render_gauge_with};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let aqi: f64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 150.0,
    };

    let config = GaugeConfig::default();
    let gauge = render_gauge_with(aqi, &config);
    print!("{}", gauge.render_svg(&config));

    Ok(())
}
