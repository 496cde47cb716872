// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};

use crate::collector_repo::CollectorRepo;
use crate::config::AppConfig;
use crate::models::PerformanceSummary;
use crate::worker::LatestSummary;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) summary_tx: broadcast::Sender<Arc<PerformanceSummary>>,
    pub(crate) latest: Arc<LatestSummary>,
    pub(crate) collector_repo: Arc<CollectorRepo>,
    pub(crate) ws_summary_connections: Arc<AtomicUsize>,
    pub(crate) config: AppConfig,
}

pub fn app(
    summary_tx: broadcast::Sender<Arc<PerformanceSummary>>,
    latest: Arc<LatestSummary>,
    collector_repo: Arc<CollectorRepo>,
    ws_summary_connections: Arc<AtomicUsize>,
    config: AppConfig,
) -> Router {
    let state = AppState {
        summary_tx,
        latest,
        collector_repo,
        ws_summary_connections,
        config,
    };
    Router::new()
        .route("/", get(|| async { "perfsummary: application performance summaries" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/summary", post(http::build_summary_handler)) // POST /api/summary
        .route("/api/summary/latest", get(http::latest_summary_handler)) // GET /api/summary/latest
        .route("/api/collectors/{id}", get(http::collector_item_handler)) // GET /api/collectors/{id}
        .route("/ws/summary", get(ws::ws_summary)) // WS /ws/summary
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
