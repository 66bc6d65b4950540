use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use super::SensorProbe;
use crate::core::snapshot::MemoryReading;
use crate::error::ProbeError;

/// Samples total physical memory and current usage percentage.
pub struct MemoryProbe {
    system: System,
}

impl MemoryProbe {
    pub fn new() -> Self {
        let refresh = RefreshKind::nothing().with_memory(MemoryRefreshKind::everything());
        Self {
            system: System::new_with_specifics(refresh),
        }
    }
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorProbe<MemoryReading> for MemoryProbe {
    fn probe(&mut self) -> Result<MemoryReading, ProbeError> {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        if total == 0 {
            return Err(ProbeError::sensor_read("no physical memory reported"));
        }

        let used = self.system.used_memory();
        Ok(MemoryReading {
            total_bytes: total,
            usage_percent: (used as f64 / total as f64) * 100.0,
        })
    }
}
