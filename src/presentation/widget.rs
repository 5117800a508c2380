// Widget - one mounted dashboard: poll handle, published state and chart panel
use crate::application::poller::{PollHandle, Poller};
use crate::application::telemetry_service::TelemetryService;
use crate::domain::widget_state::WidgetState;
use crate::presentation::panel::ChartPanel;
use crate::presentation::view::DashboardView;
use tokio::sync::watch;

pub struct Widget {
    handle: PollHandle,
    state: watch::Receiver<WidgetState>,
    panel: ChartPanel,
}

impl Widget {
    /// Mounting starts polling right away and resets the chart order.
    pub fn mount(service: TelemetryService) -> Self {
        let (handle, state) = Poller::spawn(service);
        tracing::info!("air quality widget mounted");
        Self {
            handle,
            state,
            panel: ChartPanel::new(),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state.borrow().clone()
    }

    /// Wait for the poller to publish a new state. Returns `false` once the
    /// poller is gone.
    pub async fn changed(&mut self) -> bool {
        self.state.changed().await.is_ok()
    }

    /// A separate receiver, for hosts that wait on state changes while
    /// also handing the widget out mutably.
    pub fn subscribe(&self) -> watch::Receiver<WidgetState> {
        self.state.clone()
    }

    pub fn view(&self) -> DashboardView {
        DashboardView::build(&self.state.borrow(), self.panel.order())
    }

    pub fn panel(&self) -> &ChartPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut ChartPanel {
        &mut self.panel
    }

    pub fn is_polling(&self) -> bool {
        self.handle.is_running()
    }

    pub fn unmount(mut self) {
        self.handle.cancel();
        tracing::info!("air quality widget unmounted");
    }
}
