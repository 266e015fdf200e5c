//! Route configuration for the RPC API.

use super::handlers::*;
use super::state::RpcState;
use axum::{
    routing::{get, post},
    Router,
};

/// Create the full router with all RPC routes.
pub fn create_router(state: RpcState) -> Router {
    let mut router = Router::new()
        // Health probe (no prefix)
        .route("/health", get(health_handler))
        // Cycle API
        .nest("/api", api_routes());

    // Metrics (no prefix, for Prometheus scraping)
    if state.metrics_enabled {
        router = router.route("/metrics", get(metrics_handler));
    }

    router.with_state(state)
}

/// Create the `/api` router.
fn api_routes() -> Router<RpcState> {
    Router::new()
        .route("/state", get(state_handler))
        .route("/next-color", post(next_color_handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{CycleStateResponse, HealthResponse, NextColorResponse};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chroma_cycle::CycleManager;
    use chroma_storage::{JsonFileStore, MemoryStore, StateStore};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn create_test_state(store: Box<dyn StateStore>, metrics_enabled: bool) -> RpcState {
        RpcState::new(Arc::new(CycleManager::with_seed(store, 5)), metrics_enabled)
    }

    fn memory_state() -> RpcState {
        create_test_state(Box::new(MemoryStore::new()), false)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_router_health() {
        let app = create_router(memory_state());

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn test_router_state() {
        let app = create_router(memory_state());

        let response = app.oneshot(get_request("/api/state")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let state: CycleStateResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(state.color_index, 0);
        assert_eq!(state.total_colors, 12);
    }

    #[tokio::test]
    async fn test_router_next_color_requires_post() {
        let app = create_router(memory_state());

        let response = app.oneshot(get_request("/api/next-color")).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_router_metrics_disabled() {
        let app = create_router(memory_state());

        let response = app.oneshot(get_request("/metrics")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_router_metrics_enabled() {
        chroma_metrics_prometheus::install();
        let app = create_router(create_test_state(Box::new(MemoryStore::new()), true));

        let response = app.oneshot(get_request("/metrics")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_file_backed_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("db.json");
        let app = create_router(create_test_state(
            Box::new(JsonFileStore::new(&path)),
            false,
        ));

        let response = app
            .clone()
            .oneshot(post_request("/api/next-color"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let next: NextColorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(next.new_index, 1);

        let raw = std::fs::read_to_string(&path).unwrap();
        let persisted: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted["colorIndex"], 1);
        assert_eq!(persisted["shuffledColors"][0], next.selected_color.as_str());

        let response = app.oneshot(get_request("/api/state")).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let state: CycleStateResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(state.color_index, 1);
        assert_eq!(
            state.current_color.map(|c| c.as_str().to_string()),
            persisted["shuffledColors"][1].as_str().map(str::to_string)
        );
    }
}
