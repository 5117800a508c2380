// Poller - runs the fetch-and-transform cycle on a fixed interval
use crate::application::telemetry_service::TelemetryService;
use crate::domain::widget_state::WidgetState;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Owns the polling task. Cancelling is idempotent and also happens on drop,
/// so the timer never outlives the widget that started it.
#[derive(Debug)]
pub struct PollHandle {
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("air quality polling cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub struct Poller;

impl Poller {
    /// Start polling: one fetch immediately, then one per [`POLL_INTERVAL`].
    ///
    /// Ticks run one after another inside a single task. A tick that comes due
    /// while a fetch is still outstanding is skipped, so an older response can
    /// never land after a newer one.
    pub fn spawn(service: TelemetryService) -> (PollHandle, watch::Receiver<WidgetState>) {
        let (tx, rx) = watch::channel(WidgetState::Loading);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(POLL_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                tracing::debug!("polling latest air quality");

                let result = service.fetch_snapshot().await;
                match &result {
                    Ok(snapshot) => {
                        tracing::debug!(readings = snapshot.len(), "air quality refreshed")
                    }
                    Err(e) => tracing::warn!(error = %e, "air quality poll failed"),
                }

                if tx.send(WidgetState::from_poll(result)).is_err() {
                    tracing::debug!("no widget listening, stopping poller");
                    break;
                }
            }
        });

        (PollHandle { task: Some(task) }, rx)
    }
}
