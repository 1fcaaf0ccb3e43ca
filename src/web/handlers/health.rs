//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::pvr::Scheduler;
use crate::web::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub channels: usize,
    pub recordings: usize,
}

/// Liveness plus the size of the loaded guide
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let channels = state.guide.read().await.channels.len();
    let recordings = state.scheduler.read().await.records().len();

    Json(HealthResponse {
        status: "healthy",
        channels,
        recordings,
    })
}
