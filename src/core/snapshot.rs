use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

/// One consistent set of telemetry readings produced at a single tick.
///
/// Every field carries exactly one state: a reading, a failure, or (for the
/// GPU) explicit unavailability. Snapshots are built fresh each tick, handed
/// to the presentation sink, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub taken_at: i64, // Unix timestamp
    pub address: Result<String, ProbeError>,
    pub cpu: Result<CpuReading, ProbeError>,
    pub memory: Result<MemoryReading, ProbeError>,
    pub gpu: GpuStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuReading {
    pub model: String,
    pub usage_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryReading {
    pub total_bytes: u64,
    pub usage_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuReading {
    pub model: String,
    pub usage_percent: f64,
}

/// GPU telemetry state for one tick.
///
/// `Unavailable` means no GPU query capability exists on this host at all.
/// It is terminal for the process lifetime and distinct from `Failed`, which
/// means a present capability errored on this read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GpuStatus {
    Ready(GpuReading),
    Failed(ProbeError),
    Unavailable,
}

impl GpuStatus {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, GpuStatus::Unavailable)
    }
}

impl CpuReading {
    /// Reject NaN or out-of-range usage instead of clamping it through.
    pub fn validated(self) -> Result<Self, ProbeError> {
        checked_percent(self.usage_percent)?;
        Ok(self)
    }
}

impl MemoryReading {
    pub fn validated(self) -> Result<Self, ProbeError> {
        checked_percent(self.usage_percent)?;
        Ok(self)
    }
}

impl GpuReading {
    pub fn validated(self) -> Result<Self, ProbeError> {
        checked_percent(self.usage_percent)?;
        Ok(self)
    }
}

fn checked_percent(value: f64) -> Result<f64, ProbeError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ProbeError::sensor_read(format!(
            "usage percent out of range: {value}"
        )))
    }
}
