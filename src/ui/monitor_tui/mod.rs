//! Terminal User Interface for the telemetry panel.
//!
//! Provides a real-time dashboard using ratatui.

mod app;
mod event_handler;
mod render;
mod widgets;

pub use app::{run_monitor_app, MonitorApp, MonitorAppConfig};
pub use event_handler::MonitorEvent;
