//! Mock recommendation service and dashboard helpers for integration tests

#![allow(dead_code)]

use axum::{http::StatusCode, routing::post, Json, Router};
use crop_advisor::{
    app_state::AppState,
    routes,
    services::{
        controller::SubmissionController,
        dispatcher::RecommendationClient,
        validation::ValidationPolicy,
    },
    ui::surface::Surface,
};
use scraper::{Html, Selector};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// A running stand-in for the recommendation service.
pub struct MockService {
    pub endpoint: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockService {
    /// Payloads received so far, in arrival order.
    pub fn payloads(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// Service that always answers with `status` and `reply`.
pub async fn spawn_mock_service(status: StatusCode, reply: Value) -> MockService {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let app = Router::new().route(
        "/predict",
        post(move |Json(payload): Json<Value>| {
            let sink = sink.clone();
            let reply = reply.clone();
            async move {
                sink.lock().unwrap().push(payload);
                (status, Json(reply))
            }
        }),
    );

    MockService {
        endpoint: format!("{}/predict", serve(app).await),
        received,
    }
}

/// Service that waits `area` milliseconds, then recommends the submitted
/// soil type back.
pub async fn spawn_echo_service() -> MockService {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let app = Router::new().route(
        "/predict",
        post(move |Json(payload): Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(payload.clone());
                let delay = payload["area"].as_f64().unwrap_or(0.0) as u64;
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Json(json!({"recommendation": payload["soil_type"]}))
            }
        }),
    );

    MockService {
        endpoint: format!("{}/predict", serve(app).await),
        received,
    }
}

/// An endpoint on a port nothing listens on.
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/predict")
}

pub fn controller(
    endpoint: &str,
    timeout: Option<Duration>,
    policy: ValidationPolicy,
) -> SubmissionController<RecommendationClient> {
    let client = RecommendationClient::new(endpoint, timeout).expect("client");
    SubmissionController::new(client, Arc::new(Mutex::new(Surface::default())), policy)
}

/// Start the dashboard against `endpoint`, returning its base URL.
pub async fn spawn_dashboard(endpoint: &str, policy: ValidationPolicy) -> String {
    let client = RecommendationClient::new(endpoint, None).expect("client");
    serve(routes::router(AppState::new(client, policy))).await
}

/// Text content of every element matching `selector`.
pub fn texts(html: &str, selector: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}
