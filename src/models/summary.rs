// Output bundle consumed by the dashboard

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::{SeverityLevel, Violation};

/// Wire value of [`AggregatedRate::NoData`].
pub const NO_DATA_COLLECTED: &str = "No Data Collected";

/// Averaged rate over a batch, or `NoData` when no sample qualified.
/// Serializes as a JSON number or the string "No Data Collected".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregatedRate {
    Value(f64),
    NoData,
}

impl AggregatedRate {
    pub fn value(&self) -> Option<f64> {
        match self {
            AggregatedRate::Value(v) => Some(*v),
            AggregatedRate::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, AggregatedRate::NoData)
    }
}

impl Serialize for AggregatedRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AggregatedRate::Value(v) => serializer.serialize_f64(*v),
            AggregatedRate::NoData => serializer.serialize_str(NO_DATA_COLLECTED),
        }
    }
}

impl<'de> Deserialize<'de> for AggregatedRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RateVisitor;

        impl Visitor<'_> for RateVisitor {
            type Value = AggregatedRate;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a number or \"{}\"", NO_DATA_COLLECTED)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(AggregatedRate::Value(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(AggregatedRate::Value(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(AggregatedRate::Value(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                if v == NO_DATA_COLLECTED {
                    Ok(AggregatedRate::NoData)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(RateVisitor)
    }
}

/// Chart points with their time labels, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub points: Vec<f64>,
    pub labels: Vec<String>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Two-slice donut: `[value, 100 - value]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRatio {
    pub series: [f64; 2],
}

impl HealthRatio {
    pub fn value(&self) -> f64 {
        self.series[0]
    }
}

/// Reference-sample violations split by severity and incident status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationBuckets {
    /// Open warnings.
    pub warning: Vec<Violation>,
    /// Warnings no longer open.
    pub good: Vec<Violation>,
    /// Everything above warning severity.
    pub bad: Vec<Violation>,
}

impl ViolationBuckets {
    pub fn len(&self) -> usize {
        self.warning.len() + self.good.len() + self.bad.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Violations reported by one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationHistoryEntry {
    pub timestamp: i64,
    pub violations: Vec<Violation>,
}

/// Everything the performance widget renders for one collector item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub collector_item_id: String,
    /// Filled from the collector lookup; absent until resolved.
    pub display_name: Option<String>,
    /// Update time reported by the sample source, else the newest sample's timestamp.
    pub last_updated: i64,
    pub business_health_ratio: Option<HealthRatio>,
    pub node_health_ratio: Option<HealthRatio>,
    pub error_severity: Option<SeverityLevel>,
    pub response_severity: Option<SeverityLevel>,
    pub errors_per_minute_avg: AggregatedRate,
    pub calls_per_minute_avg: AggregatedRate,
    pub avg_response_time: AggregatedRate,
    pub calls_series: ChartSeries,
    pub errors_series: ChartSeries,
    pub violation_buckets: ViolationBuckets,
    pub recent_violations: Vec<ViolationHistoryEntry>,
}

impl PerformanceSummary {
    pub fn with_display_name(mut self, display_name: Option<String>) -> Self {
        self.display_name = display_name;
        self
    }

    /// Replaces `last_updated` with the time the source reported, when it reported one.
    pub fn with_reported_update(mut self, reported: Option<i64>) -> Self {
        if let Some(ts) = reported {
            self.last_updated = ts;
        }
        self
    }
}
