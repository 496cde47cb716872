use anyhow::Result;
use perfsummary::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize};
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    tracing::info!(
        samples_path = %app_config.sources.samples_path,
        utc_offset_hours = app_config.display.utc_offset_hours,
        "config loaded"
    );
    let (tx, _) = broadcast::channel::<Arc<models::PerformanceSummary>>(
        app_config.refresh.broadcast_capacity,
    );

    let sample_repo = Arc::new(sample_repo::SampleRepo::new(
        &app_config.sources.samples_path,
        app_config.sources.max_samples,
    ));
    let collector_repo = Arc::new(collector_repo::CollectorRepo::new(
        app_config.sources.collectors_path.as_ref().map(PathBuf::from),
    ));
    let latest = Arc::new(worker::LatestSummary::default());
    let ws_summary_connections = Arc::new(AtomicUsize::new(0));
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let worker_handle = worker::spawn(
        worker::WorkerDeps {
            sample_repo,
            collector_repo: collector_repo.clone(),
            tx: tx.clone(),
            latest: latest.clone(),
            refreshes_total: Arc::new(AtomicU64::new(0)),
            ws_summary_connections: ws_summary_connections.clone(),
            shutdown_rx,
        },
        worker::WorkerConfig {
            interval_secs: app_config.refresh.interval_secs,
            options: app_config.summary_options(),
        },
    );

    let app = routes::app(
        tx,
        latest,
        collector_repo,
        ws_summary_connections,
        app_config.clone(),
    );
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }
        } => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(());
            let _ = worker_handle.await;
        }
    }

    Ok(())
}
