//! Advisory payload returned by the backend's `/get-advisory` endpoint

use crate::category::AqiReading;
use crate::error::{GaugeError, Result};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Top-level advisory response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawResponse")]
pub struct AdvisoryResponse {
    pub aqi: AirQuality,
    pub advisory: Advisory,
}

impl AdvisoryResponse {
    /// Parse a response body
    ///
    /// # Errors
    ///
    /// * `GaugeError::MissingField` - a required field is absent
    /// * `GaugeError::InvalidPayload` - body is not valid JSON of this shape
    /// * `GaugeError::InvalidReading` - `indian_aqi` is not finite
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawResponse = serde_json::from_str(json)?;
        let response = Self::try_from(raw)?;
        debug!(
            indian_aqi = response.aqi.indian_aqi,
            activities = response.advisory.activities.len(),
            "parsed advisory response"
        );
        Ok(response)
    }

    /// The reading shown on the gauge
    ///
    /// # Errors
    ///
    /// * `GaugeError::InvalidReading` - `indian_aqi` is not finite
    pub fn reading(&self) -> Result<AqiReading> {
        AqiReading::new(self.aqi.indian_aqi)
    }
}

// Required fields are checked in `try_from` and reported by name
#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    aqi: Option<RawAirQuality>,
    #[serde(default)]
    advisory: Option<Advisory>,
}

#[derive(Deserialize)]
struct RawAirQuality {
    #[serde(default)]
    indian_aqi: Option<f64>,
    #[serde(default)]
    pm2_5: Option<f64>,
    #[serde(default)]
    aqi_index: Option<u8>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| GaugeError::MissingField(field.to_string()))
}

impl TryFrom<RawResponse> for AdvisoryResponse {
    type Error = GaugeError;

    fn try_from(raw: RawResponse) -> Result<Self> {
        let aqi = required(raw.aqi, "aqi")?;
        let indian_aqi = required(aqi.indian_aqi, "indian_aqi")?;
        AqiReading::new(indian_aqi)?;

        Ok(Self {
            aqi: AirQuality {
                indian_aqi,
                pm2_5: required(aqi.pm2_5, "pm2_5")?,
                aqi_index: aqi.aqi_index,
            },
            advisory: required(raw.advisory, "advisory")?,
        })
    }
}

/// Live air quality for the user's position
#[derive(Debug, Clone, PartialEq)]
pub struct AirQuality {
    /// Index on the Indian national (CPCB) scale
    pub indian_aqi: f64,
    /// PM2.5 in μg/m³
    pub pm2_5: f64,
    /// Upstream provider's 1..=5 index, when forwarded
    pub aqi_index: Option<u8>,
}

/// Guidance generated for the user
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "AdvisoryRepr")]
pub struct Advisory {
    /// Activity guidance, in the order the backend sent it
    pub activities: Vec<Activity>,
    /// Markdown advisory text, passed through untouched
    pub advisory_text: String,
}

// Older backends send the advisory as bare text
#[derive(Deserialize)]
#[serde(untagged)]
enum AdvisoryRepr {
    Text(String),
    Structured {
        #[serde(default, deserialize_with = "deserialize_activities")]
        activities: Vec<Activity>,
        #[serde(default)]
        advisory_text: String,
    },
}

impl From<AdvisoryRepr> for Advisory {
    fn from(repr: AdvisoryRepr) -> Self {
        match repr {
            AdvisoryRepr::Text(advisory_text) => Self {
                activities: Vec::new(),
                advisory_text,
            },
            AdvisoryRepr::Structured {
                activities,
                advisory_text,
            } => Self {
                activities,
                advisory_text,
            },
        }
    }
}

/// Guidance for one activity, e.g. `outdoor_exercise`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub key: String,
    pub status: String,
    pub color: StatusColor,
}

impl Activity {
    /// Card title: underscores become spaces
    #[must_use]
    pub fn title(&self) -> String {
        self.key.replace('_', " ")
    }

    #[must_use]
    pub fn icon(&self) -> ActivityIcon {
        ActivityIcon::for_key(&self.key)
    }
}

#[derive(Deserialize)]
struct ActivityBody {
    #[serde(default)]
    status: String,
    #[serde(default)]
    color: Option<String>,
}

fn deserialize_activities<'de, D>(deserializer: D) -> std::result::Result<Vec<Activity>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ActivitiesVisitor;

    impl<'de> Visitor<'de> for ActivitiesVisitor {
        type Value = Vec<Activity>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of activity name to guidance")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut activities = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, body)) = map.next_entry::<String, ActivityBody>()? {
                let color = StatusColor::parse(body.color.as_deref().unwrap_or_default());
                if color == StatusColor::Unknown {
                    warn!(activity = %key, raw = ?body.color, "unrecognised activity color");
                }
                activities.push(Activity {
                    key,
                    status: body.status,
                    color,
                });
            }
            Ok(activities)
        }
    }

    deserializer.deserialize_map(ActivitiesVisitor)
}

/// Traffic-light color attached to an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Red,
    Yellow,
    Green,
    #[default]
    Unknown,
}

impl StatusColor {
    /// Case-insensitive; anything unrecognised is `Unknown`
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "red" => Self::Red,
            "yellow" => Self::Yellow,
            "green" => Self::Green,
            _ => Self::Unknown,
        }
    }

    /// Classes for the pulsing status dot
    #[must_use]
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Red => "bg-red-500 shadow-red-500/50",
            Self::Yellow => "bg-yellow-400 shadow-yellow-400/50",
            Self::Green => "bg-emerald-500 shadow-emerald-500/50",
            Self::Unknown => "bg-gray-400",
        }
    }

    /// Text color classes for the activity icon
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Red => "text-red-600",
            Self::Yellow => "text-yellow-600",
            Self::Green => "text-emerald-600",
            Self::Unknown => "text-gray-600",
        }
    }
}

/// Icon shown on an activity card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityIcon {
    Exercise,
    Walking,
    Indoor,
    Generic,
}

impl ActivityIcon {
    /// Pick an icon from keywords in the activity key, first match wins
    #[must_use]
    pub fn for_key(key: &str) -> Self {
        let key = key.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| key.contains(w));

        if has(&["outdoor", "exercise"]) {
            Self::Exercise
        } else if has(&["walk", "commute"]) {
            Self::Walking
        } else if has(&["indoor", "ventilation"]) {
            Self::Indoor
        } else {
            Self::Generic
        }
    }

    /// Icon name in the dashboard's icon set
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Exercise => "dumbbell",
            Self::Walking => "footprints",
            Self::Indoor => "home",
            Self::Generic => "activity",
        }
    }
}
