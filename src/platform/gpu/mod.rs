//! GPU-specific platform code.
//!
//! Provides GPU telemetry for different vendors.
//! Supports NVIDIA (via NVML) and AMD (via ROCm SMI).

mod amd;
mod nvidia;

pub use amd::AmdGpuProvider;
pub use nvidia::NvidiaGpuProvider;

use crate::core::snapshot::GpuReading;
use crate::error::ProbeError;

/// Vendor-specific GPU query backend.
pub trait GpuProvider: Send {
    fn sample(&mut self) -> Result<GpuReading, ProbeError>;
}

/// Attempt to get an available GPU provider
///
/// Tries each supported vendor in order of preference:
/// 1. NVIDIA (via NVML)
/// 2. AMD (via ROCm SMI)
///
/// Returns error if no GPU query capability exists on this host.
pub fn get_gpu_provider() -> Result<Box<dyn GpuProvider>, ProbeError> {
    // Try NVIDIA first
    if let Ok(provider) = NvidiaGpuProvider::new() {
        return Ok(Box::new(provider));
    }

    // Try AMD
    if let Ok(provider) = AmdGpuProvider::new() {
        return Ok(Box::new(provider));
    }

    Err(ProbeError::sensor_read("no supported GPU found"))
}
