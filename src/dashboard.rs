//! Everything the dashboard draws for one advisory response

use crate::advisory::{ActivityIcon, AdvisoryResponse, StatusColor};
use crate::category::{Category, ColorToken, classify, color_for};
use crate::error::Result;
use crate::gauge::{Gauge, GaugeConfig, render_gauge_with};
use crate::reaction::{ReactionImage, reaction_for};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Reading as received, before clamping for the gauge
    pub aqi: f64,
    pub pm2_5: f64,
    pub category: Category,
    pub color: ColorToken,
    pub reaction: ReactionImage,
    pub gauge: Gauge,
    pub activities: Vec<ActivityCard>,
    pub advisory_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityCard {
    pub title: String,
    pub icon: ActivityIcon,
    pub color: StatusColor,
    pub status: String,
}

impl DashboardView {
    #[must_use]
    pub fn from_response(response: &AdvisoryResponse, config: &GaugeConfig) -> Self {
        let aqi = response.aqi.indian_aqi;
        if !(0.0..=config.scale_max()).contains(&aqi) {
            warn!(aqi, scale_max = config.scale_max(), "reading off the gauge scale, clamping");
        }

        let activities = response
            .advisory
            .activities
            .iter()
            .map(|activity| ActivityCard {
                title: activity.title(),
                icon: activity.icon(),
                color: activity.color,
                status: activity.status.clone(),
            })
            .collect();

        let view = Self {
            aqi,
            pm2_5: response.aqi.pm2_5,
            category: classify(aqi),
            color: color_for(aqi),
            reaction: reaction_for(aqi),
            gauge: render_gauge_with(aqi, config),
            activities,
            advisory_text: response.advisory.advisory_text.clone(),
        };
        debug!(aqi, category = %view.category, "composed dashboard view");
        view
    }

    /// Parse a backend response and compose the view
    ///
    /// # Errors
    ///
    /// See [`AdvisoryResponse::from_json`]
    pub fn from_json(json: &str, config: &GaugeConfig) -> Result<Self> {
        let response = AdvisoryResponse::from_json(json)?;
        Ok(Self::from_response(&response, config))
    }
}
