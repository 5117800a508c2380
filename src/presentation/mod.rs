// Presentation layer - Widget lifetime, chart panel, view model and text rendering
pub mod commands;
pub mod panel;
pub mod render;
pub mod view;
pub mod widget;
