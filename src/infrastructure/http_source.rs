// HTTP telemetry source backed by reqwest
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::error::DashboardError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpTelemetrySource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTelemetrySource {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, DashboardError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DashboardError::Transport(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TelemetrySource for HttpTelemetrySource {
    async fn fetch_latest(&self) -> Result<Value, DashboardError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Http {
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                tracing::debug!(endpoint = %self.endpoint, "response body is not JSON: {}", e);
                DashboardError::MalformedResponse(format!("body is not valid JSON: {}", e))
            } else {
                DashboardError::Transport(e.to_string())
            }
        })
    }
}
