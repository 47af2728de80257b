//! Readiness endpoint
//!
//! Liveness (`/health`) comes from axum-helpers and never touches the store;
//! readiness additionally pings MongoDB so orchestrators can hold traffic
//! while the store is unreachable.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    mongodb: bool,
    response_time_ms: u64,
}

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let mongo = database::mongodb::check_health_detailed(&state.mongo_client).await;

    Json(ReadinessResponse {
        status: if mongo.healthy { "ready" } else { "unhealthy" },
        mongodb: mongo.healthy,
        response_time_ms: mongo.response_time_ms,
    })
}
