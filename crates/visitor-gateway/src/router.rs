//! Axum router wiring.
//!
//! `/` and `/v1/visits` count a visit on GET/POST. OPTIONS (CORS preflight)
//! and HEAD answer 204 without counting. Ops endpoints live beside them.

use axum::{routing::get, Router};

use crate::{app_state::AppState, counter, ops};

pub fn build_router(state: AppState) -> Router {
    let visits = get(counter::visits)
        .post(counter::visits)
        .options(counter::preflight)
        .head(counter::preflight);

    Router::new()
        .route("/", visits.clone())
        .route("/v1/visits", visits)
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
