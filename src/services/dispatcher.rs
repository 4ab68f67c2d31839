use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::models::sample::SoilSample;

/// Result of a completed HTTP exchange with the recommendation service.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub status: u16,
    pub success: bool,
    /// Body parsed as JSON when possible, whatever the status.
    pub body: Option<Value>,
}

/// Sends one soil sample and waits for the reply.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, sample: &SoilSample) -> Result<Exchange, DispatchError>;
}

/// HTTP client for the recommendation service's predict endpoint.
pub struct RecommendationClient {
    http: Client,
    endpoint: String,
}

impl RecommendationClient {
    /// `timeout` of `None` waits on the service indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, DispatchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(DispatchError::Client)?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Dispatcher for RecommendationClient {
    async fn dispatch(&self, sample: &SoilSample) -> Result<Exchange, DispatchError> {
        tracing::debug!(payload = ?sample, endpoint = %self.endpoint, "Sending sample to recommendation service");

        let response = self.http.post(&self.endpoint).json(sample).send().await?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "Recommendation service responded");

        let bytes = response.bytes().await?;
        let body = serde_json::from_slice::<Value>(&bytes).ok();
        tracing::debug!(body = ?body, "Recommendation service body");

        Ok(Exchange {
            status: status.as_u16(),
            success: status.is_success(),
            body,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("Recommendation request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
