//! Route handlers

use super::{ApiError, AppState};
use crate::market::MarketRecord;
use crate::telemetry::{record_latency, record_request, LatencyMetric, RequestOutcome};
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

/// Path of the market data endpoint
pub const INFLATION_PATH: &str = "/api/inflation";

/// GET /api/inflation: the CPI card wrapped in a one-element list
pub async fn get_inflation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MarketRecord>>, ApiError> {
    let started = Instant::now();
    let result = state.adapter.fetch_market().await;
    record_latency(LatencyMetric::Request, started.elapsed());

    match result {
        Ok(record) => {
            record_request(RequestOutcome::Success);
            Ok(Json(vec![record]))
        }
        Err(e) => {
            record_request(RequestOutcome::Unavailable);
            Err(e.into())
        }
    }
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
