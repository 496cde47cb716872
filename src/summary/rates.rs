// Rate aggregation: one newest-first pass over the batch

use crate::models::{AggregatedRate, Sample, ViolationHistoryEntry};

use super::metrics::round_one_decimal;

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;

/// Chart label `"{hours}:{minutes}"` (both unpadded) for an epoch-millis timestamp,
/// shifted by `utc_offset_hours` for display.
pub fn time_label(timestamp: i64, utc_offset_hours: i32) -> String {
    let minutes = timestamp.div_euclid(MS_PER_MINUTE).rem_euclid(60);
    let hours = (timestamp.div_euclid(MS_PER_HOUR).rem_euclid(24) + utc_offset_hours as i64)
        .rem_euclid(24);
    format!("{}:{}", hours, minutes)
}

/// Running count and sum of the samples that reported a positive value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateAccumulator {
    pub count: u32,
    pub sum: f64,
}

impl RateAccumulator {
    /// Returns the value if it qualified. Zero and negative readings do not.
    pub fn push(&mut self, value: Option<f64>) -> Option<f64> {
        let v = value.filter(|v| *v > 0.0)?;
        self.count += 1;
        self.sum += v;
        Some(v)
    }

    pub fn finish(&self) -> AggregatedRate {
        if self.count == 0 {
            AggregatedRate::NoData
        } else {
            AggregatedRate::Value(round_one_decimal(self.sum / self.count as f64))
        }
    }
}

/// Chart points and labels in the order they were walked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesAccumulator {
    pub points: Vec<f64>,
    pub labels: Vec<String>,
}

impl SeriesAccumulator {
    fn push(&mut self, value: f64, label: String) {
        self.points.push(value);
        self.labels.push(label);
    }
}

/// Everything collected while walking the batch newest-first.
/// Series and history are in walk order (newest first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateWalk {
    pub errors_per_minute: RateAccumulator,
    pub calls_per_minute: RateAccumulator,
    pub response_time: RateAccumulator,
    pub errors_series: SeriesAccumulator,
    pub calls_series: SeriesAccumulator,
    pub violation_history: Vec<ViolationHistoryEntry>,
}

impl RateWalk {
    /// `descending` must be newest first.
    pub fn run(descending: &[&Sample], utc_offset_hours: i32) -> Self {
        let mut walk = Self::default();
        for sample in descending {
            let m = &sample.metrics;

            if let Some(violations) = &m.violation_object {
                walk.violation_history.push(ViolationHistoryEntry {
                    timestamp: sample.timestamp,
                    violations: violations.clone(),
                });
            }
            if let Some(v) = walk.errors_per_minute.push(m.errors_per_minute) {
                walk.errors_series
                    .push(v, time_label(sample.timestamp, utc_offset_hours));
            }
            if let Some(v) = walk.calls_per_minute.push(m.calls_per_minute) {
                walk.calls_series
                    .push(v, time_label(sample.timestamp, utc_offset_hours));
            }
            walk.response_time.push(m.average_response_time);
        }
        walk
    }
}
