// Scalar metrics read from the reference (earliest) sample

use crate::models::{HealthRatio, Sample, SeverityLevel};

/// Round half away from zero to one decimal place.
pub fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Collector percent metrics arrive as fractions; 0.9234 becomes 92.3.
pub fn fraction_to_percent(fraction: f64) -> f64 {
    (fraction * 100.0 * 10.0).round() / 10.0
}

/// Donut pair for a percentage already on the 0..100 scale.
pub fn health_ratio(percent: f64) -> HealthRatio {
    HealthRatio {
        series: [percent, round_one_decimal(100.0 - percent)],
    }
}

/// Health and severity scalars taken from the start of the batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceMetrics {
    pub business_health: Option<f64>,
    pub node_health: Option<f64>,
    pub error_severity: Option<SeverityLevel>,
    pub response_severity: Option<SeverityLevel>,
}

impl ReferenceMetrics {
    /// `ascending` must be oldest first. Health and response severity come from the
    /// first sample only; error severity falls back to the earliest sample carrying it.
    pub fn extract(ascending: &[&Sample]) -> Self {
        let Some(reference) = ascending.first() else {
            return Self::default();
        };
        let m = &reference.metrics;
        let error_severity = ascending
            .iter()
            .find_map(|s| s.metrics.error_rate_severity.clone());

        Self {
            business_health: m
                .business_transaction_health_percent
                .map(fraction_to_percent),
            node_health: m.node_health_percent.map(fraction_to_percent),
            error_severity,
            response_severity: m.response_time_severity.clone(),
        }
    }
}
