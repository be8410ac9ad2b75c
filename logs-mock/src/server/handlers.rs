//! HTTP route handlers for the log server.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use super::metrics::Metrics;
use super::request::ListParams;
use super::response::HealthResponse;
use crate::{Error, LogStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LogStore>,
    pub metrics: Arc<Metrics>,
    /// Page size for list requests without `limit`.
    pub default_limit: usize,
}

impl AppState {
    pub fn new(store: Arc<LogStore>, metrics: Arc<Metrics>, default_limit: usize) -> Self {
        metrics.log_store_records.set(store.len() as i64);
        Self {
            store,
            metrics,
            default_limit,
        }
    }
}

/// Handle GET /logs
///
/// Returns one page of the (optionally level-filtered) records together with
/// the cursor for the next page and the size of the filtered view.
pub async fn handle_list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let query = params.to_query(state.default_limit).inspect_err(|e| {
        if matches!(e, Error::InvalidCursor(_)) {
            state.metrics.log_cursor_rejections_total.inc();
        }
        tracing::debug!("Rejected list request: {}", e);
    })?;

    let page = state.store.list(&query);
    state
        .metrics
        .log_records_served_total
        .inc_by(page.items.len() as u64);

    Ok(Json(&page).into_response())
}

/// Handle GET /logs/{id}
///
/// The supplementary detail fields are drawn fresh on every call.
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    state.metrics.log_detail_lookups_total.inc();
    let detail = state.store.detail(&id, &mut rand::rng()).inspect_err(|e| {
        tracing::debug!("Detail lookup failed: {}", e);
    })?;
    Ok(Json(detail).into_response())
}

/// Handle GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handle GET /metrics
pub async fn handle_metrics(State(state): State<AppState>) -> String {
    state.metrics.encode()
}
