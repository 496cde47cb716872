// Bucketing of health-rule violations for the donut/detail views

use crate::models::{IncidentStatus, Severity, Violation, ViolationBuckets};

/// Open warnings go to `warning`, warnings in any other status to `good`,
/// every other severity to `bad`. Input order is kept within each bucket.
pub fn classify(violations: &[Violation]) -> ViolationBuckets {
    let mut buckets = ViolationBuckets::default();
    for v in violations {
        match (v.severity, v.incident_status) {
            (Severity::Warning, IncidentStatus::Open) => buckets.warning.push(v.clone()),
            (Severity::Warning, _) => buckets.good.push(v.clone()),
            _ => buckets.bad.push(v.clone()),
        }
    }
    buckets
}
