// Air quality dashboard - polls the latest telemetry and renders four reorderable charts
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
