use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crop_advisor::app_state::AppState;
use crop_advisor::config::AppConfig;
use crop_advisor::routes;
use crop_advisor::services::dispatcher::RecommendationClient;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!(
        endpoint = %config.recommendation_endpoint,
        validation_policy = %config.validation_policy,
        "Initializing crop-advisor dashboard"
    );

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    metrics::describe_counter!("submissions_total", "Submissions started");
    metrics::describe_counter!(
        "submissions_rejected_total",
        "Submissions blocked by the validation policy"
    );
    metrics::describe_counter!(
        "submission_outcomes_total",
        "Settled submissions by outcome"
    );
    metrics::describe_histogram!(
        "dispatch_duration_seconds",
        "Time spent waiting on the recommendation service"
    );

    let client = RecommendationClient::new(
        config.recommendation_endpoint.clone(),
        config.request_timeout(),
    )
    .expect("Failed to initialize recommendation client");

    let state = AppState::new(client, config.validation_policy);

    let app = routes::router(state)
        .route(
            "/metrics",
            get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(64 * 1024));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Dashboard listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
