use std::io;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Custom error type for the hostwatch application
#[derive(Error, Debug)]
pub enum HostwatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("TUI error: {0}")]
    Tui(String),
}

/// Result type alias for the hostwatch application
pub type Result<T> = std::result::Result<T, HostwatchError>;

impl HostwatchError {
    /// Create a runtime error
    pub fn runtime<S: Into<String>>(msg: S) -> Self {
        HostwatchError::Runtime(msg.into())
    }

    /// Create a TUI error
    pub fn tui<S: Into<String>>(msg: S) -> Self {
        HostwatchError::Tui(msg.into())
    }
}

/// Failure taxonomy for sensor probes.
///
/// Every fault inside a probe is caught at the probe boundary and converted
/// into one of these kinds. GPU capability absence is not a probe error; it
/// is modeled as `GpuStatus::Unavailable` on the snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeError {
    /// Address resolution found no usable network.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    /// An OS telemetry read failed or produced unusable data.
    #[error("sensor read failed: {0}")]
    SensorRead(String),
}

impl ProbeError {
    /// Create a network unavailable error
    pub fn network_unavailable<S: Into<String>>(msg: S) -> Self {
        ProbeError::NetworkUnavailable(msg.into())
    }

    /// Create a sensor read error
    pub fn sensor_read<S: Into<String>>(msg: S) -> Self {
        ProbeError::SensorRead(msg.into())
    }

    /// Short cause label for panel display; the full detail goes to the log.
    pub fn label(&self) -> &'static str {
        match self {
            ProbeError::NetworkUnavailable(_) => "network unavailable",
            ProbeError::SensorRead(_) => "sensor read failed",
        }
    }
}
