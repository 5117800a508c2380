// Error types shared by the poller and the chart panel
use thiserror::Error;

/// Failure of a single fetch-and-transform cycle.
///
/// The widget only ever shows the rendered message; the variants exist so
/// callers and tests can tell the causes apart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DragError {
    #[error("slot {slot} is out of range (expected 0..{len})")]
    SlotOutOfRange { slot: usize, len: usize },
}
