//! Wire DTOs for the Remote API.
//!
//! DESIGN
//! ======
//! Records are decoded leniently: plot references arrive under several field
//! names and as numbers or strings, and sensor readings may be long form
//! (`sensor_type` + `value`) or wide form (one field per metric). Accessors
//! normalize both so page code never branches on the wire shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Access/refresh pair returned by the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Login form payload for the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Measured quantity of a sensor reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Temperature,
    Humidity,
    Moisture,
}

impl SensorKind {
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Humidity, Self::Moisture];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Moisture => "moisture",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Moisture => "Soil moisture",
        }
    }

    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity | Self::Moisture => "%",
        }
    }
}

/// Plot identifier fields as they appear on readings and anomalies.
///
/// The backend has used `plot`, `plot_id`, and `field_plot`; the first one
/// present wins, in that order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotRef {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub plot: Option<String>,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub plot_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub field_plot: Option<String>,
}

impl PlotRef {
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.plot
            .as_deref()
            .or(self.plot_id.as_deref())
            .or(self.field_plot.as_deref())
    }
}

/// One sensor measurement record from `/sensor-readings/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub plot_ref: PlotRef,
    #[serde(default)]
    pub sensor_type: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub moisture: Option<f64>,
}

impl SensorReading {
    #[must_use]
    pub fn plot_key(&self) -> Option<&str> {
        self.plot_ref.key()
    }

    /// Value of `kind` carried by this reading, in either wire shape.
    #[must_use]
    pub fn metric(&self, kind: SensorKind) -> Option<f64> {
        let wide = match kind {
            SensorKind::Temperature => self.temperature,
            SensorKind::Humidity => self.humidity,
            SensorKind::Moisture => self.moisture,
        };
        wide.or_else(|| {
            self.sensor_type
                .as_deref()
                .filter(|t| t.eq_ignore_ascii_case(kind.as_str()))
                .and(self.value)
        })
    }
}

/// One detected anomaly from `/anomalies/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub plot_ref: PlotRef,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub anomaly_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub agent_recommendation: Option<String>,
    #[serde(default)]
    pub agent_explanation: Option<String>,
    #[serde(default)]
    pub model_confidence: Option<f64>,
}

impl AnomalyRecord {
    #[must_use]
    pub fn plot_key(&self) -> Option<&str> {
        self.plot_ref.key()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.anomaly_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Anomaly Detected")
    }
}

/// Detector evaluation summary from `/ml-metrics/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MlMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub false_positive_rate: f64,
    pub total_anomalies: u64,
    pub total_readings: u64,
    pub true_positives: u64,
}

/// One point of the anomalies-over-time series from `/anomaly-curve/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyCurvePoint {
    pub time: String,
    pub count: u64,
}

/// Accept an identifier encoded as a JSON string or number.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
