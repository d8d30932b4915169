//! HTTP routing for the filter API.
//!
//! Four operations make up the contract: add, check, stats and reset. Method
//! restriction is enforced by the router (wrong verb yields 405) and payload
//! decoding by the `Json` extractor (malformed bodies are rejected before
//! they reach the core). `/health` and `/metrics` are operational endpoints
//! outside that contract.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::domain::StatsSnapshot;
use crate::error::FilterError;
use crate::http::types::{AddResponse, CheckResponse, ItemRequest, ResetResponse};
use crate::metrics::MetricsSnapshot;
use crate::service::FilterService;

/// Largest accepted request body. Items are short strings; anything bigger
/// is rejected at the gate.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FilterService>,
}

/// Build the API router around one filter service instance.
pub fn build_router(service: Arc<FilterService>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/api/add", post(handle_add))
        .route("/api/check", post(handle_check))
        .route("/api/stats", get(handle_stats))
        .route("/api/reset", post(handle_reset))
        .route("/health", get(health_check))
        .route("/metrics", get(handle_metrics))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware)
        .with_state(AppState { service })
}

async fn handle_add(
    State(state): State<AppState>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<AddResponse>, StatusCode> {
    state
        .service
        .add(req.item.as_bytes())
        .map(|()| Json(AddResponse { success: true }))
        .map_err(internal_error)
}

async fn handle_check(
    State(state): State<AppState>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<CheckResponse>, StatusCode> {
    state
        .service
        .check(req.item.as_bytes())
        .map(|exists| Json(CheckResponse { exists }))
        .map_err(internal_error)
}

async fn handle_stats(State(state): State<AppState>) -> Json<StatsSnapshot> {
    Json(state.service.stats())
}

async fn handle_reset(State(state): State<AppState>) -> Json<ResetResponse> {
    state.service.reset();
    Json(ResetResponse { success: true })
}

async fn handle_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.service.metrics().snapshot())
}

async fn health_check() -> &'static str {
    "OK"
}

/// A core error here means an internal invariant was violated, never a bad
/// request; report it and answer 500.
fn internal_error(err: FilterError) -> StatusCode {
    error!(error = %err, "filter operation failed");
    StatusCode::INTERNAL_SERVER_ERROR
}
