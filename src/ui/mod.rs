pub mod formatters;
pub mod monitor_tui;

pub use formatters::{snapshot_rows, FIELD_LABELS};
