use super::SensorProbe;
use crate::core::snapshot::GpuReading;
use crate::error::ProbeError;
use crate::platform::gpu::{get_gpu_provider, GpuProvider};

/// Samples the first supported GPU through the platform provider.
pub struct GpuProbe {
    provider: Box<dyn GpuProvider>,
}

impl GpuProbe {
    /// Detect GPU query capability once, at construction.
    ///
    /// `None` means no capability exists on this host at all; the snapshot
    /// reports that as `GpuStatus::Unavailable`, not as a failure.
    pub fn detect() -> Option<Self> {
        match get_gpu_provider() {
            Ok(provider) => Some(Self { provider }),
            Err(err) => {
                log::warn!("GPU capability not present: {err}");
                None
            }
        }
    }
}

impl SensorProbe<GpuReading> for GpuProbe {
    fn probe(&mut self) -> Result<GpuReading, ProbeError> {
        self.provider.sample()
    }
}
