// Input samples as delivered by the performance collector API

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One timestamped snapshot of performance metrics for a collector item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// Epoch millis.
    pub timestamp: i64,
    pub collector_item_id: String,
    #[serde(default)]
    pub metrics: SampleMetrics,
}

/// Recognized metrics of a sample. Every field may be missing on any given sample;
/// keys the pipeline does not consume are dropped on decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleMetrics {
    /// Fraction in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_transaction_health_percent: Option<f64>,
    /// Fraction in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_health_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_rate_severity: Option<SeverityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_severity: Option<SeverityLevel>,
    /// The collector emits `errorsperMinute`; both spellings are accepted.
    #[serde(default, alias = "errorsperMinute", skip_serializing_if = "Option::is_none")]
    pub errors_per_minute: Option<f64>,
    #[serde(default, alias = "callsperMinute", skip_serializing_if = "Option::is_none")]
    pub calls_per_minute: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_response_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation_object: Option<Vec<Violation>>,
}

/// Severity scalar reported by the collector; passed through to the dashboard as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeverityLevel {
    Numeric(f64),
    Label(String),
}

/// Violation severity; unknown, missing and null values decode to `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Warning,
    Critical,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IncidentStatus {
    Open,
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// `null` decodes like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A health-rule violation. Descriptive fields (name, description, deep link, ...)
/// are carried verbatim in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: Severity,
    #[serde(default, deserialize_with = "null_as_default")]
    pub incident_status: IncidentStatus,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Violation {
    pub fn new(severity: Severity, incident_status: IncidentStatus) -> Self {
        Self {
            severity,
            incident_status,
            details: Map::new(),
        }
    }

    /// Adds one descriptive field (e.g. `name`, `deepLinkUrl`).
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }
}
