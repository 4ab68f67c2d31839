use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;
use crate::ui::surface::lock;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub endpoint: String,
    pub submission: String,
}

/// GET /health — liveness plus the configured service endpoint.
///
/// The recommendation service is not probed: a probe would be a second
/// request to an endpoint that only expects submissions.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let submission = lock(state.page.surface()).state.to_string();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoint: state.endpoint.to_string(),
        submission,
    })
}
