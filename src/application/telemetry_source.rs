// Source trait for latest air-quality telemetry
use crate::domain::error::DashboardError;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Fetch the raw body of the latest-readings endpoint.
    /// Non-success statuses and transport failures are reported as errors;
    /// the body is returned unvalidated.
    async fn fetch_latest(&self) -> Result<Value, DashboardError>;
}
