// Typed errors for the summary pipeline and its data sources

use std::path::PathBuf;

use thiserror::Error;

/// Structural problems with a sample batch. Numeric gaps (absent or zero metrics)
/// never surface here; they resolve to `None` or `AggregatedRate::NoData`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The batch had no samples to pick a reference sample from.
    #[error("sample batch is empty")]
    EmptyBatch,

    /// A batch must describe a single collector item.
    #[error("sample batch mixes collector items: expected {expected}, found {found}")]
    MixedCollectors { expected: String, found: String },
}

/// Failures of the sample or collector sources. Owned by callers of the pipeline.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
