use once_cell::sync::OnceCell;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

use super::SensorProbe;
use crate::core::snapshot::CpuReading;
use crate::error::ProbeError;

/// Samples the CPU model string and instantaneous usage percentage.
///
/// The model is static for the process lifetime and cached on first
/// successful read. The `System` handle persists across calls so each usage
/// reading covers the interval since the previous tick rather than a
/// zero-biased instant; the very first call primes the counters with
/// `MINIMUM_CPU_UPDATE_INTERVAL`.
pub struct CpuProbe {
    system: System,
    model: OnceCell<String>,
    primed: bool,
}

impl CpuProbe {
    pub fn new() -> Self {
        let refresh = RefreshKind::nothing().with_cpu(CpuRefreshKind::everything());
        Self {
            system: System::new_with_specifics(refresh),
            model: OnceCell::new(),
            primed: false,
        }
    }
}

impl Default for CpuProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorProbe<CpuReading> for CpuProbe {
    fn probe(&mut self) -> Result<CpuReading, ProbeError> {
        self.system.refresh_cpu_all();
        if !self.primed {
            // Usage is a delta between two refreshes; the first sample needs
            // a real interval between them.
            std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
            self.system.refresh_cpu_all();
            self.primed = true;
        }

        if self.system.cpus().is_empty() {
            return Err(ProbeError::sensor_read("no CPUs enumerated"));
        }

        let model = self
            .model
            .get_or_init(|| {
                self.system
                    .cpus()
                    .first()
                    .map(|cpu| cpu.brand().trim().to_string())
                    .filter(|brand| !brand.is_empty())
                    .unwrap_or_else(|| "Unknown".to_string())
            })
            .clone();

        Ok(CpuReading {
            model,
            usage_percent: f64::from(self.system.global_cpu_usage()),
        })
    }
}
