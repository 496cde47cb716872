// Domain models: collector samples in, dashboard summary out

mod collector;
mod sample;
mod summary;

pub use collector::{CollectorItem, CollectorOptions};
pub use sample::{IncidentStatus, Sample, SampleMetrics, Severity, SeverityLevel, Violation};
pub use summary::{
    AggregatedRate, ChartSeries, HealthRatio, NO_DATA_COLLECTED, PerformanceSummary,
    ViolationBuckets, ViolationHistoryEntry,
};
