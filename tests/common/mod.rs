// Shared test helpers
#![allow(dead_code)]

use perfsummary::models::*;

pub const COLLECTOR_ID: &str = "5a1f0c2e9b1d4e0012ab34cd";

/// 2017-07-14T02:40:00Z
pub const BASE_TS: i64 = 1_500_000_000_000;
pub const MINUTE_MS: i64 = 60_000;

pub fn sample(timestamp: i64) -> Sample {
    Sample {
        timestamp,
        collector_item_id: COLLECTOR_ID.to_string(),
        metrics: SampleMetrics::default(),
    }
}

pub fn sample_with(timestamp: i64, f: impl FnOnce(&mut SampleMetrics)) -> Sample {
    let mut s = sample(timestamp);
    f(&mut s.metrics);
    s
}

pub fn calls_sample(timestamp: i64, calls_per_minute: f64) -> Sample {
    sample_with(timestamp, |m| m.calls_per_minute = Some(calls_per_minute))
}

pub fn violation(severity: Severity, status: IncidentStatus, name: &str) -> Violation {
    Violation::new(severity, status).with_detail("name", name)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be within 1e-9 of {}",
        actual,
        expected
    );
}
