// Hostwatch Library - Public API

// Re-export error types
pub mod error;
pub use error::{HostwatchError, ProbeError, Result};

// Module declarations
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use self::core::{Snapshot, SnapshotCollector};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
