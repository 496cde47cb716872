// End-to-end summary tests: scenarios, invariants, input errors

mod common;

use common::*;
use perfsummary::error::InputError;
use perfsummary::models::*;
use perfsummary::summary::window::WINDOW_SIZE;
use perfsummary::summary::{SummaryOptions, build_summary};

fn options() -> SummaryOptions {
    SummaryOptions::default()
}

#[test]
fn default_display_offset_is_nineteen_hours() {
    assert_eq!(SummaryOptions::default().utc_offset_hours, 19);
}

#[test]
fn all_zero_errors_yield_no_data_and_empty_series() {
    let samples: Vec<Sample> = (0..10)
        .map(|i| sample_with(BASE_TS + i * MINUTE_MS, |m| m.errors_per_minute = Some(0.0)))
        .collect();
    let summary = build_summary(&samples, &options()).unwrap();
    assert_eq!(summary.errors_per_minute_avg, AggregatedRate::NoData);
    assert!(summary.errors_series.points.is_empty());
    assert!(summary.errors_series.labels.is_empty());
}

#[test]
fn three_call_samples_average_and_chart_chronologically() {
    // 5, 10, 15 in newest-first order
    let samples = vec![
        calls_sample(BASE_TS + 2 * MINUTE_MS, 5.0),
        calls_sample(BASE_TS + MINUTE_MS, 10.0),
        calls_sample(BASE_TS, 15.0),
    ];
    let summary = build_summary(&samples, &options()).unwrap();
    assert_eq!(summary.calls_per_minute_avg, AggregatedRate::Value(10.0));
    assert_eq!(summary.calls_series.points, vec![15.0, 10.0, 5.0]);
    assert_eq!(summary.calls_series.labels, vec!["21:40", "21:41", "21:42"]);
}

#[test]
fn reference_violations_are_bucketed() {
    let list = vec![
        violation(Severity::Warning, IncidentStatus::Open, "item0"),
        violation(Severity::Warning, IncidentStatus::Closed, "item1"),
        violation(Severity::Critical, IncidentStatus::Open, "item2"),
    ];
    let samples = vec![
        sample_with(BASE_TS + MINUTE_MS, |m| {
            m.violation_object = Some(vec![violation(
                Severity::Critical,
                IncidentStatus::Open,
                "later",
            )])
        }),
        sample_with(BASE_TS, |m| m.violation_object = Some(list.clone())),
    ];
    let summary = build_summary(&samples, &options()).unwrap();
    assert_eq!(summary.violation_buckets.warning, vec![list[0].clone()]);
    assert_eq!(summary.violation_buckets.good, vec![list[1].clone()]);
    assert_eq!(summary.violation_buckets.bad, vec![list[2].clone()]);
}

#[test]
fn node_health_percent_is_converted() {
    let samples = vec![sample_with(BASE_TS, |m| m.node_health_percent = Some(0.9234))];
    let summary = build_summary(&samples, &options()).unwrap();
    let ratio = summary.node_health_ratio.unwrap();
    assert_close(ratio.value(), 92.3);
    assert_close(ratio.series[1], 7.7);
    assert_close(ratio.series[0] + ratio.series[1], 100.0);
}

#[test]
fn series_keep_seven_most_recent_oldest_first() {
    let samples: Vec<Sample> = (1..=10)
        .rev()
        .map(|i| {
            sample_with(BASE_TS + i * MINUTE_MS, |m| {
                m.calls_per_minute = Some(i as f64);
                m.errors_per_minute = Some(i as f64 * 10.0);
            })
        })
        .collect();
    let summary = build_summary(&samples, &options()).unwrap();

    assert_eq!(
        summary.calls_series.points,
        vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
    );
    assert_eq!(
        summary.calls_series.labels,
        vec!["21:44", "21:45", "21:46", "21:47", "21:48", "21:49", "21:50"]
    );
    assert_eq!(
        summary.errors_series.points,
        vec![40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
    );
    // averages cover the whole batch, not just the window
    assert_eq!(summary.calls_per_minute_avg, AggregatedRate::Value(5.5));
    assert_eq!(summary.errors_per_minute_avg, AggregatedRate::Value(55.0));
}

#[test]
fn recent_violations_keep_seven_most_recent_oldest_first() {
    let samples: Vec<Sample> = (0..9)
        .map(|i| {
            sample_with(BASE_TS + i * MINUTE_MS, |m| {
                m.violation_object = Some(vec![violation(
                    Severity::Warning,
                    IncidentStatus::Open,
                    &format!("v{}", i),
                )])
            })
        })
        .collect();
    let summary = build_summary(&samples, &options()).unwrap();
    let stamps: Vec<i64> = summary
        .recent_violations
        .iter()
        .map(|e| e.timestamp)
        .collect();
    let expected: Vec<i64> = (2..9).map(|i| BASE_TS + i * MINUTE_MS).collect();
    assert_eq!(stamps, expected);
}

#[test]
fn chart_invariants_hold_across_batch_shapes() {
    for n in 1..=20i64 {
        for zero_every in 1..=4i64 {
            let samples: Vec<Sample> = (0..n)
                .map(|i| {
                    sample_with(BASE_TS + ((i * 37) % n) * MINUTE_MS, |m| {
                        let v = if i % zero_every == 0 { 0.0 } else { i as f64 };
                        m.calls_per_minute = Some(v);
                        if i % 2 == 0 {
                            m.errors_per_minute = Some(v * 2.0);
                        }
                        m.average_response_time = Some(v + 0.25);
                    })
                })
                .collect();
            let summary = build_summary(&samples, &options()).unwrap();

            for series in [&summary.calls_series, &summary.errors_series] {
                assert_eq!(series.points.len(), series.labels.len());
                assert!(series.points.len() <= WINDOW_SIZE);
            }

            let qualifying: Vec<f64> = samples
                .iter()
                .filter_map(|s| s.metrics.calls_per_minute)
                .filter(|v| *v > 0.0)
                .collect();
            match summary.calls_per_minute_avg {
                AggregatedRate::NoData => assert!(qualifying.is_empty()),
                AggregatedRate::Value(avg) => {
                    let expected = (qualifying.iter().sum::<f64>() / qualifying.len() as f64
                        * 10.0)
                        .round()
                        / 10.0;
                    assert_close(avg, expected);
                }
            }
            assert_eq!(
                summary.calls_series.len(),
                qualifying.len().min(WINDOW_SIZE)
            );
        }
    }
}

#[test]
fn empty_batch_is_an_input_error() {
    let err = build_summary(&[], &options()).unwrap_err();
    assert_eq!(err, InputError::EmptyBatch);
}

#[test]
fn mixed_collector_items_are_rejected() {
    let mut other = sample(BASE_TS + MINUTE_MS);
    other.collector_item_id = "other".into();
    let samples = vec![sample(BASE_TS), other];
    let err = build_summary(&samples, &options()).unwrap_err();
    assert_eq!(
        err,
        InputError::MixedCollectors {
            expected: COLLECTOR_ID.into(),
            found: "other".into(),
        }
    );
}

#[test]
fn missing_reference_violations_yield_empty_buckets() {
    let samples = vec![
        sample(BASE_TS),
        sample_with(BASE_TS + MINUTE_MS, |m| {
            m.violation_object = Some(vec![violation(
                Severity::Critical,
                IncidentStatus::Open,
                "x",
            )])
        }),
    ];
    let summary = build_summary(&samples, &options()).unwrap();
    assert!(summary.violation_buckets.is_empty());
    assert_eq!(summary.recent_violations.len(), 1);
}

#[test]
fn missing_health_and_rates_resolve_without_error() {
    let summary = build_summary(&[sample(BASE_TS)], &options()).unwrap();
    assert_eq!(summary.collector_item_id, COLLECTOR_ID);
    assert_eq!(summary.display_name, None);
    assert_eq!(summary.last_updated, BASE_TS);
    assert!(summary.business_health_ratio.is_none());
    assert!(summary.node_health_ratio.is_none());
    assert!(summary.error_severity.is_none());
    assert!(summary.response_severity.is_none());
    assert!(summary.errors_per_minute_avg.is_no_data());
    assert!(summary.calls_per_minute_avg.is_no_data());
    assert!(summary.avg_response_time.is_no_data());
    assert!(summary.calls_series.is_empty());
    assert!(summary.recent_violations.is_empty());
}

#[test]
fn last_updated_is_newest_sample() {
    let samples = vec![
        sample(BASE_TS + MINUTE_MS),
        sample(BASE_TS + 5 * MINUTE_MS),
        sample(BASE_TS),
    ];
    let summary = build_summary(&samples, &options()).unwrap();
    assert_eq!(summary.last_updated, BASE_TS + 5 * MINUTE_MS);
}

#[test]
fn display_offset_is_configurable() {
    let samples = vec![calls_sample(BASE_TS, 1.0)];
    let summary = build_summary(&samples, &SummaryOptions { utc_offset_hours: 0 }).unwrap();
    assert_eq!(summary.calls_series.labels, vec!["2:40"]);
}

#[test]
fn same_batch_builds_identical_summaries() {
    let samples = vec![
        calls_sample(BASE_TS + MINUTE_MS, 3.0),
        sample_with(BASE_TS, |m| {
            m.business_transaction_health_percent = Some(0.42);
            m.violation_object = Some(vec![]);
        }),
    ];
    let a = build_summary(&samples, &options()).unwrap();
    let b = build_summary(&samples, &options()).unwrap();
    assert_eq!(a, b);
}
