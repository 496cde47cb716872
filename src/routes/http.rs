// HTTP handlers: version, summaries, collector lookup

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::error::InputError;
use crate::models::Sample;
use crate::summary::build_summary;

/// Package name and version (from Cargo.toml).
const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

impl IntoResponse for InputError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// POST /api/summary: summarizes the posted sample batch with the configured display offset.
pub(super) async fn build_summary_handler(
    State(state): State<AppState>,
    Json(samples): Json<Vec<Sample>>,
) -> Result<impl IntoResponse, InputError> {
    let summary = build_summary(&samples, &state.config.summary_options())?;
    Ok(Json(summary))
}

/// GET /api/summary/latest: last summary published by the refresh worker.
pub(super) async fn latest_summary_handler(State(state): State<AppState>) -> Response {
    match state.latest.get().await {
        Some(summary) => Json(summary.as_ref().clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "no summary published yet" })),
        )
            .into_response(),
    }
}

/// GET /api/collectors/{id}: collector item metadata.
pub(super) async fn collector_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.collector_repo.get_collector_item(&id).await {
        Ok(Some(item)) => Json(item).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("unknown collector item {}", id) })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, operation = "get_collector_item", "collector lookup failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
