#[cfg(feature = "nvml")]
use nvml_wrapper::{Device, Nvml};

use super::GpuProvider;
use crate::core::snapshot::GpuReading;
use crate::error::ProbeError;

/// NVIDIA GPU provider using NVML
pub struct NvidiaGpuProvider {
    #[cfg(feature = "nvml")]
    nvml: Nvml,
    #[allow(dead_code)]
    device_index: u32,
}

impl NvidiaGpuProvider {
    /// Create a new NVIDIA GPU provider
    ///
    /// Initializes NVML and selects the first available GPU.
    pub fn new() -> Result<Self, ProbeError> {
        Self::with_device_index(0)
    }

    /// Create provider for a specific GPU index
    pub fn with_device_index(index: u32) -> Result<Self, ProbeError> {
        #[cfg(feature = "nvml")]
        {
            let nvml = Nvml::init()
                .map_err(|e| ProbeError::sensor_read(format!("Failed to init NVML: {}", e)))?;

            // Verify device exists
            let _ = nvml.device_by_index(index).map_err(|e| {
                ProbeError::sensor_read(format!("GPU {} not found: {}", index, e))
            })?;

            Ok(Self {
                nvml,
                device_index: index,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            let _ = index;
            Err(ProbeError::sensor_read("NVIDIA GPU support not enabled"))
        }
    }

    #[cfg(feature = "nvml")]
    fn device(&self) -> Result<Device<'_>, ProbeError> {
        self.nvml
            .device_by_index(self.device_index)
            .map_err(|e| ProbeError::sensor_read(format!("Failed to get GPU device: {}", e)))
    }
}

impl GpuProvider for NvidiaGpuProvider {
    fn sample(&mut self) -> Result<GpuReading, ProbeError> {
        #[cfg(feature = "nvml")]
        {
            let device = self.device()?;

            let model = device
                .name()
                .unwrap_or_else(|_| "Unknown NVIDIA GPU".to_string());

            // A failed utilization read is an error, not a silent zero.
            let utilization = device.utilization_rates().map_err(|e| {
                ProbeError::sensor_read(format!("Failed to read GPU utilization: {}", e))
            })?;

            Ok(GpuReading {
                model,
                usage_percent: f64::from(utilization.gpu),
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(ProbeError::sensor_read("NVIDIA GPU support not enabled"))
        }
    }
}
