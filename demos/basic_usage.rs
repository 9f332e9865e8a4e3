//! Basic Usage Example for Respi-Guard Gauge
//!
//! Classifies a few readings, then composes a full dashboard view from a
//! sample backend response.
//!
//! Run with: cargo run --example basic_usage

use respi_gauge::{
    DashboardView, GaugeConfig, ReverseGeocode, classify, color_for, format_coordinates,
    reaction_for, render_gauge,
};

const SAMPLE_RESPONSE: &str = r#"{
    "aqi": {"indian_aqi": 187, "pm2_5": 74.3},
    "advisory": {
        "activities": {
            "outdoor_exercise": {"status": "Move workouts indoors", "color": "red"},
            "evening_walk": {"status": "Keep it short", "color": "yellow"},
            "indoor_ventilation": {"status": "Run the purifier", "color": "green"}
        },
        "advisory_text": "Based on the GINA 2023 guidelines, keep your reliever inhaler close."
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🌫️  Respi-Guard Gauge - Basic Usage Example\n");

    println!("📊 Example 1: Classifying readings");
    println!("==================================");
    for aqi in [12.0, 50.0, 51.0, 160.0, 250.0, 333.0, 450.0, 720.0] {
        let gauge = render_gauge(aqi);
        println!(
            "AQI {aqi:>5}: {:<12} {} reaction={:?} needle={:.1}°",
            classify(aqi).label(),
            color_for(aqi),
            reaction_for(aqi),
            gauge.angle_degrees
        );
    }

    println!();

    println!("📍 Example 2: Location card");
    println!("===========================");
    let geo = ReverseGeocode::from_json(r#"{"city": "", "locality": "Durgapur"}"#)?;
    println!("{} ({})", geo.area_name(), format_coordinates(23.520_444, 87.311_923));

    println!();

    println!("🩺 Example 3: Dashboard view");
    println!("============================");
    let view = DashboardView::from_json(SAMPLE_RESPONSE, &GaugeConfig::default())?;
    println!("IND AQI {} - {} ({})", view.aqi, view.category, view.color);
    println!("PM 2.5: {} µg/m³", view.pm2_5);
    println!("Reaction: {}", view.reaction.asset_path());
    for card in &view.activities {
        println!("  [{}] {} ({:?}): {}", card.icon.name(), card.title, card.color, card.status);
    }
    println!("\n{}", view.advisory_text);

    Ok(())
}
