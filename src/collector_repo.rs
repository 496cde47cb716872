// Collector item lookup by id, read from a JSON file

use std::path::PathBuf;

use tracing::instrument;

use crate::error::UpstreamError;
use crate::models::CollectorItem;

pub struct CollectorRepo {
    path: Option<PathBuf>,
}

impl CollectorRepo {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Repo with no backing file; every lookup resolves to `None`.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Re-reads the file on every call so edits show up on the next refresh.
    #[instrument(skip(self), fields(repo = "collectors", operation = "get_collector_item"))]
    pub async fn get_collector_item(
        &self,
        id: &str,
    ) -> Result<Option<CollectorItem>, UpstreamError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| UpstreamError::Read {
                path: path.clone(),
                source,
            })?;
        let items: Vec<CollectorItem> =
            serde_json::from_slice(&bytes).map_err(|source| UpstreamError::Decode {
                path: path.clone(),
                source,
            })?;
        Ok(items.into_iter().find(|item| item.id == id))
    }

    /// Description of the collector item, if it is known.
    pub async fn display_name(&self, id: &str) -> Result<Option<String>, UpstreamError> {
        Ok(self
            .get_collector_item(id)
            .await?
            .map(|item| item.description))
    }
}
