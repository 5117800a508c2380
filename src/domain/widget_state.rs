// Widget state machine: Loading -> Ready | Error
use crate::domain::error::DashboardError;
use crate::domain::snapshot::Snapshot;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum WidgetState {
    #[default]
    Loading,
    Ready(Snapshot),
    Error(String),
}

impl WidgetState {
    /// Outcome of one poll. Every tick fully replaces the previous state.
    pub fn from_poll(result: Result<Snapshot, DashboardError>) -> Self {
        match result {
            Ok(snapshot) => WidgetState::Ready(snapshot),
            Err(e) => WidgetState::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetState::Loading)
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            WidgetState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WidgetState::Error(message) => Some(message),
            _ => None,
        }
    }
}
