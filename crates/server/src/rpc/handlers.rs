//! HTTP request handlers for the RPC API.

use super::state::RpcState;
use super::types::*;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::error;

// ═══════════════════════════════════════════════════════════════════════════
// Health & Metrics Handlers
// ═══════════════════════════════════════════════════════════════════════════

/// Handler for `GET /health` - liveness probe.
pub async fn health_handler(State(state): State<RpcState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// Handler for `GET /metrics` - Prometheus metrics.
pub async fn metrics_handler() -> impl IntoResponse {
    match chroma_metrics_prometheus::encode_metrics() {
        Ok((content_type, buffer)) => {
            ([(axum::http::header::CONTENT_TYPE, content_type)], buffer).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to encode metrics".to_string(),
            )
                .into_response()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Cycle Handlers
// ═══════════════════════════════════════════════════════════════════════════

/// Handler for `GET /api/state` - current position in the cycle.
///
/// Never fails on a missing or corrupt record: a fresh cycle is shown
/// instead (and only persisted once a color is actually handed out).
pub async fn state_handler(State(state): State<RpcState>) -> impl IntoResponse {
    let cycle = state.cycle.clone();

    match tokio::task::spawn_blocking(move || cycle.current_view()).await {
        Ok(view) => (StatusCode::OK, Json(CycleStateResponse::from(view))).into_response(),
        Err(e) => internal_error(format!("State task failed: {e}")),
    }
}

/// Handler for `POST /api/next-color` - advance the cycle.
///
/// Loads the record, selects the color under the cursor (starting a new
/// shuffle first if the cycle is exhausted), and saves before responding.
/// Returns 500 if the save fails; the advance is then not applied and the
/// client may retry.
pub async fn next_color_handler(State(state): State<RpcState>) -> impl IntoResponse {
    let cycle = state.cycle.clone();

    match tokio::task::spawn_blocking(move || cycle.next_color()).await {
        Ok(Ok(selection)) => {
            (StatusCode::OK, Json(NextColorResponse::from(selection))).into_response()
        }
        Ok(Err(e)) => internal_error(format!("Failed to save state: {e}")),
        Err(e) => internal_error(format!("Next-color task failed: {e}")),
    }
}

fn internal_error(message: String) -> axum::response::Response {
    error!(error = %message, "Request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}
