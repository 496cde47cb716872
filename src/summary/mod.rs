// Summary pipeline: sample batch in, dashboard bundle out.
// Pure and synchronous; no I/O and no state kept between calls.

pub mod metrics;
pub mod ordering;
pub mod rates;
pub mod violations;
pub mod window;

use tracing::{debug, instrument};

use crate::error::InputError;
use crate::models::{ChartSeries, PerformanceSummary, Sample};
use metrics::{ReferenceMetrics, health_ratio};
use rates::{RateWalk, SeriesAccumulator};

/// Display offset (hours) used by the deployed dashboard for chart labels.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 19;

/// Knobs for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Added to the UTC hour of each chart label, modulo 24.
    pub utc_offset_hours: i32,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

/// Builds the summary for one batch of samples from a single collector item.
///
/// The earliest sample supplies health, severities and the violation buckets.
/// Rates and chart series cover the whole batch; series and violation history
/// keep the `WINDOW_SIZE` most recent entries, oldest first.
#[instrument(skip(samples, options), fields(samples_count = samples.len()))]
pub fn build_summary(
    samples: &[Sample],
    options: &SummaryOptions,
) -> Result<PerformanceSummary, InputError> {
    let ascending = ordering::sorted_ascending(samples);
    let (Some(reference), Some(newest)) = (ascending.first(), ascending.last()) else {
        return Err(InputError::EmptyBatch);
    };
    if let Some(other) = samples
        .iter()
        .find(|s| s.collector_item_id != reference.collector_item_id)
    {
        return Err(InputError::MixedCollectors {
            expected: reference.collector_item_id.clone(),
            found: other.collector_item_id.clone(),
        });
    }

    let scalars = ReferenceMetrics::extract(&ascending);
    let violation_buckets = match &reference.metrics.violation_object {
        Some(list) => violations::classify(list),
        None => {
            debug!(
                timestamp = reference.timestamp,
                "reference sample has no violationObject; violation buckets empty"
            );
            Default::default()
        }
    };

    let descending = ordering::sorted_descending(samples);
    let walk = RateWalk::run(&descending, options.utc_offset_hours);

    let mut history = walk.violation_history;
    history.reverse();
    let recent_violations = window::window(history);

    let summary = PerformanceSummary {
        collector_item_id: reference.collector_item_id.clone(),
        display_name: None,
        last_updated: newest.timestamp,
        business_health_ratio: scalars.business_health.map(health_ratio),
        node_health_ratio: scalars.node_health.map(health_ratio),
        error_severity: scalars.error_severity,
        response_severity: scalars.response_severity,
        errors_per_minute_avg: walk.errors_per_minute.finish(),
        calls_per_minute_avg: walk.calls_per_minute.finish(),
        avg_response_time: walk.response_time.finish(),
        calls_series: chronological_window(walk.calls_series),
        errors_series: chronological_window(walk.errors_series),
        violation_buckets,
        recent_violations,
    };

    debug!(
        collector_item_id = %summary.collector_item_id,
        calls_points = summary.calls_series.len(),
        errors_points = summary.errors_series.len(),
        violations = summary.violation_buckets.len(),
        "summary built"
    );
    Ok(summary)
}

/// Newest-first accumulator to an oldest-first chart holding the most recent points.
fn chronological_window(mut acc: SeriesAccumulator) -> ChartSeries {
    acc.points.reverse();
    acc.labels.reverse();
    ChartSeries {
        points: window::window(acc.points),
        labels: window::window(acc.labels),
    }
}
