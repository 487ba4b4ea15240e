use std::time::Instant;

use axum::{extract::State, response::Response};

use visitor_core::error::Result;
use visitor_core::{CounterStore, COUNTER_ATTRIBUTE, COUNTER_KEY};

use crate::app_state::AppState;
use crate::counter::response;

/// Add 1 to the counter and return the post-increment value.
///
/// A response without `visit_count` reads as 0.
pub async fn increment_visits(store: &dyn CounterStore, table: &str) -> Result<i64> {
    let updated = store.add(table, COUNTER_KEY, COUNTER_ATTRIBUTE, 1).await?;
    match updated.get(COUNTER_ATTRIBUTE) {
        Some(raw) => raw.to_i64(),
        None => Ok(0),
    }
}

/// `GET|POST /` and `/v1/visits`. Request contents are ignored.
pub async fn visits(State(app): State<AppState>) -> Response {
    let store = app.store();
    let started = Instant::now();
    let result = increment_visits(store.as_ref(), app.table_name()).await;

    let metrics = app.metrics();
    metrics
        .store_duration
        .observe(&[("backend", store.backend())], started.elapsed());

    match &result {
        Ok(visits) => {
            metrics.increments.inc(&[("outcome", "ok")]);
            tracing::debug!(visits = *visits, table = %app.table_name(), "visit counted");
        }
        Err(e) => {
            let code = e.code().as_str();
            metrics.increments.inc(&[("outcome", "error")]);
            metrics.store_errors.inc(&[("code", code)]);
            tracing::warn!(code, error = %e, table = %app.table_name(), "visit increment failed");
        }
    }

    response::visits_response(result)
}

/// `OPTIONS` preflight and `HEAD`. Never touches the counter.
pub async fn preflight() -> Response {
    response::preflight_response()
}
