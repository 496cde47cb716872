// Sample batches read from a JSON file (stand-in for the performance API)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::instrument;

use crate::error::UpstreamError;
use crate::models::Sample;
use crate::summary::ordering;

/// The API wraps batches as `{ result, lastUpdated }`; exported files are bare arrays.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SampleFile {
    Bare(Vec<Sample>),
    Envelope {
        result: Vec<Sample>,
        #[serde(rename = "lastUpdated", default)]
        last_updated: Option<i64>,
    },
}

/// Samples from one read, with the update time the API reported (envelope files only).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBatch {
    pub samples: Vec<Sample>,
    pub last_updated: Option<i64>,
}

pub struct SampleRepo {
    path: PathBuf,
    max_samples: usize,
}

impl SampleRepo {
    pub fn new(path: impl Into<PathBuf>, max_samples: usize) -> Self {
        Self {
            path: path.into(),
            max_samples,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the batch and keeps the `max_samples` most recent samples.
    /// Batches over the limit come back newest first.
    #[instrument(skip(self), fields(repo = "samples", operation = "get_samples", path = %self.path.display()))]
    pub async fn get_samples(&self) -> Result<SampleBatch, UpstreamError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| UpstreamError::Read {
                path: self.path.clone(),
                source,
            })?;
        let (samples, last_updated) = match serde_json::from_slice::<SampleFile>(&bytes).map_err(|source| {
            UpstreamError::Decode {
                path: self.path.clone(),
                source,
            }
        })? {
            SampleFile::Envelope {
                result,
                last_updated,
            } => (result, last_updated),
            SampleFile::Bare(samples) => (samples, None),
        };
        Ok(SampleBatch {
            samples: self.most_recent(samples),
            last_updated,
        })
    }

    fn most_recent(&self, samples: Vec<Sample>) -> Vec<Sample> {
        if samples.len() <= self.max_samples {
            return samples;
        }
        ordering::sorted_descending(&samples)
            .into_iter()
            .take(self.max_samples)
            .cloned()
            .collect()
    }
}
