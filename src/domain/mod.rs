// Domain layer - Readings, chart series, widget state and chart ordering
pub mod chart;
pub mod error;
pub mod order;
pub mod reading;
pub mod snapshot;
pub mod widget_state;
