use std::time::Duration;

use serde::Deserialize;

use crate::services::validation::ValidationPolicy;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Dashboard bind address (e.g., "127.0.0.1:8080")
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Predict endpoint of the recommendation service
    #[serde(default = "default_recommendation_endpoint")]
    pub recommendation_endpoint: String,

    /// `passthrough` or `reject` for unparsable area/month entries
    #[serde(default)]
    pub validation_policy: ValidationPolicy,

    /// Per-request timeout in seconds. Unset means wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_recommendation_endpoint() -> String {
    "http://127.0.0.1:5000/predict".to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Load from explicit `(NAME, value)` pairs instead of the process
    /// environment.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(pairs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
