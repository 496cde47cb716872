// Background refresh worker: fetch batch, build summary, publish.
// The display-name lookup runs alongside the build and never holds it up.

use crate::collector_repo::CollectorRepo;
use crate::models::PerformanceSummary;
use crate::sample_repo::SampleRepo;
use crate::summary::{SummaryOptions, build_summary};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use tokio::sync::{RwLock, broadcast};
use tokio::time::{Duration, interval};
use tracing::Instrument;

/// Most recently published summary, read by the HTTP handlers and the WS welcome frame.
#[derive(Debug, Default)]
pub struct LatestSummary {
    inner: RwLock<Option<Arc<PerformanceSummary>>>,
}

impl LatestSummary {
    pub async fn get(&self) -> Option<Arc<PerformanceSummary>> {
        self.inner.read().await.clone()
    }

    pub async fn set(&self, summary: Arc<PerformanceSummary>) {
        *self.inner.write().await = Some(summary);
    }
}

/// Repos, channels, and shutdown for the worker.
pub struct WorkerDeps {
    pub sample_repo: Arc<SampleRepo>,
    pub collector_repo: Arc<CollectorRepo>,
    pub tx: broadcast::Sender<Arc<PerformanceSummary>>,
    pub latest: Arc<LatestSummary>,
    pub refreshes_total: Arc<AtomicU64>,
    pub ws_summary_connections: Arc<AtomicUsize>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

pub struct WorkerConfig {
    pub interval_secs: u64,
    pub options: SummaryOptions,
}

/// One refresh cycle. Upstream and input failures propagate; a failed display-name
/// lookup only leaves `display_name` empty.
pub async fn refresh_once(
    sample_repo: &SampleRepo,
    collector_repo: &CollectorRepo,
    options: &SummaryOptions,
) -> anyhow::Result<PerformanceSummary> {
    let batch = sample_repo.get_samples().await?;
    let samples = batch.samples;
    let collector_item_id = samples.first().map(|s| s.collector_item_id.clone());

    let (summary, display_name) = tokio::join!(async { build_summary(&samples, options) }, async {
        match &collector_item_id {
            Some(id) => collector_repo.display_name(id).await,
            None => Ok(None),
        }
    });

    let display_name = display_name.unwrap_or_else(|e| {
        tracing::warn!(
            error = %e,
            operation = "get_collector_item",
            "collector lookup failed"
        );
        None
    });
    Ok(summary?
        .with_display_name(display_name)
        .with_reported_update(batch.last_updated))
}

pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        sample_repo,
        collector_repo,
        tx,
        latest,
        refreshes_total,
        ws_summary_connections,
        mut shutdown_rx,
    } = deps;
    let WorkerConfig {
        interval_secs,
        options,
    } = config;

    tokio::spawn(async move {
        let mut tick = interval(Duration::from_secs(interval_secs));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    let summary = match refresh_once(&sample_repo, &collector_repo, &options).await {
                        Ok(s) => Arc::new(s),
                        Err(e) => {
                            tracing::warn!(
                                error = %e,
                                operation = "refresh_summary",
                                "refresh failed; keeping previous summary"
                            );
                            continue;
                        }
                    };
                    let total = refreshes_total.fetch_add(1, Ordering::Relaxed) + 1;
                    let ws_clients = ws_summary_connections.load(Ordering::Relaxed);
                    tracing::info!(
                        collector_item_id = %summary.collector_item_id,
                        last_updated = summary.last_updated,
                        refreshes_total = total,
                        ws_summary_clients = ws_clients,
                        "summary refreshed"
                    );
                    latest.set(summary.clone()).await;
                    if tx.send(summary).is_err() {
                        tracing::debug!(
                            operation = "broadcast_summary",
                            "No active WebSocket clients; broadcast channel has no receivers"
                        );
                    }
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Worker shutting down");
                    break;
                }
            }
        }
    }
    .instrument(tracing::debug_span!("worker", interval_secs)))
}
