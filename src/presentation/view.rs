// View model built from the widget state and the panel order
use crate::domain::chart::ChartKind;
use crate::domain::order::ChartOrder;
use crate::domain::widget_state::WidgetState;

pub const TITLE: &str = "Air Quality Data";
const UPDATED_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub slot: usize,
    pub kind: ChartKind,
    pub label: String,
    pub time_labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    Error {
        message: String,
    },
    Charts {
        title: &'static str,
        date: Option<String>,
        /// Local time the snapshot was fetched.
        updated: String,
        panels: Vec<PanelView>,
    },
}

impl DashboardView {
    /// Errors replace the charts entirely; there is no partial render.
    pub fn build(state: &WidgetState, order: &ChartOrder) -> Self {
        let snapshot = match state {
            WidgetState::Loading => return DashboardView::Loading,
            WidgetState::Error(message) => {
                return DashboardView::Error {
                    message: message.clone(),
                };
            }
            WidgetState::Ready(snapshot) => snapshot,
        };

        let panels = order
            .as_slice()
            .iter()
            .enumerate()
            .filter_map(|(slot, &chart_index)| {
                let series = snapshot.series_at(chart_index)?;
                Some(PanelView {
                    slot,
                    kind: series.kind,
                    label: series.label.clone(),
                    time_labels: snapshot.time_labels.clone(),
                    values: series.values.clone(),
                })
            })
            .collect();

        DashboardView::Charts {
            title: TITLE,
            date: snapshot.latest_date().map(str::to_string),
            updated: snapshot.fetched_at.format(UPDATED_FORMAT).to_string(),
            panels,
        }
    }
}
