use crate::application::poller::POLL_INTERVAL;
use serde::Deserialize;
use std::time::Duration;

pub const CONFIG_FILE: &str = "config/dashboard";
pub const ENV_PREFIX: &str = "AQ_DASHBOARD";
pub const ENDPOINT_PATH: &str = "/api/latest-air-quality/";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl DashboardConfig {
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ENDPOINT_PATH)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// A request must be able to succeed and must finish before the next tick
    /// is due.
    pub fn validate(self) -> anyhow::Result<Self> {
        let timeout = self.request_timeout();
        anyhow::ensure!(
            !timeout.is_zero() && timeout < POLL_INTERVAL,
            "request_timeout_secs must be between 1 and {} (got {})",
            POLL_INTERVAL.as_secs() - 1,
            self.request_timeout_secs
        );
        Ok(self)
    }
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("base_url", "http://localhost:8000")?
        .set_default("request_timeout_secs", 5)?)
}

/// Defaults, overlaid by `config/dashboard.*` if present, overlaid by
/// `AQ_DASHBOARD_*` environment variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = builder()?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?;

    settings.try_deserialize::<DashboardConfig>()?.validate()
}
