// Telemetry service - fetch, validate and transform one poll
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::error::DashboardError;
use crate::domain::reading::parse_readings;
use crate::domain::snapshot::Snapshot;
use chrono::Local;
use std::sync::Arc;

#[derive(Clone)]
pub struct TelemetryService {
    source: Arc<dyn TelemetrySource>,
}

impl TelemetryService {
    pub fn new(source: Arc<dyn TelemetrySource>) -> Self {
        Self { source }
    }

    pub async fn fetch_snapshot(&self) -> Result<Snapshot, DashboardError> {
        let body = self.source.fetch_latest().await?;
        let readings = parse_readings(&body)?;
        Ok(Snapshot::from_readings(readings, Local::now()))
    }
}
