use axum::{routing::get, routing::post, Router};

use crate::app_state::AppState;

pub mod dashboard;
pub mod health;
pub mod metrics;

/// Dashboard and health routes. `/metrics` is added by the binary, which
/// owns the Prometheus recorder.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/submit", post(dashboard::submit))
        .route("/health", get(health::health_check))
        .with_state(state)
}
