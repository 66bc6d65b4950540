#[cfg(all(unix, feature = "rocm"))]
use rocm_smi_lib::{DeviceHandle, RocmSmi};

use super::GpuProvider;
use crate::core::snapshot::GpuReading;
use crate::error::ProbeError;

/// AMD GPU provider using ROCm SMI
pub struct AmdGpuProvider {
    #[cfg(all(unix, feature = "rocm"))]
    rocm: RocmSmi,
    #[allow(dead_code)]
    device_index: u32,
}

impl AmdGpuProvider {
    /// Create a new AMD GPU provider
    ///
    /// Initializes ROCm SMI and selects the first available GPU.
    pub fn new() -> Result<Self, ProbeError> {
        Self::with_device_index(0)
    }

    /// Create provider for a specific GPU index
    pub fn with_device_index(index: u32) -> Result<Self, ProbeError> {
        #[cfg(all(unix, feature = "rocm"))]
        {
            let rocm = RocmSmi::init().map_err(|e| {
                ProbeError::sensor_read(format!("Failed to init ROCm SMI: {:?}", e))
            })?;

            // Verify device exists
            let device_count = rocm.get_device_count().map_err(|e| {
                ProbeError::sensor_read(format!("Failed to get device count: {:?}", e))
            })?;

            if index >= device_count as u32 {
                return Err(ProbeError::sensor_read(format!(
                    "GPU {} not found (only {} devices available)",
                    index, device_count
                )));
            }

            Ok(Self {
                rocm,
                device_index: index,
            })
        }
        #[cfg(not(all(unix, feature = "rocm")))]
        {
            let _ = index;
            Err(ProbeError::sensor_read(
                "AMD GPU support not enabled or not on Unix",
            ))
        }
    }

    #[cfg(all(unix, feature = "rocm"))]
    fn device(&self) -> Result<DeviceHandle, ProbeError> {
        self.rocm
            .get_device_handle(self.device_index)
            .map_err(|e| ProbeError::sensor_read(format!("Failed to get GPU device: {:?}", e)))
    }
}

impl GpuProvider for AmdGpuProvider {
    fn sample(&mut self) -> Result<GpuReading, ProbeError> {
        #[cfg(all(unix, feature = "rocm"))]
        {
            let device = self.device()?;

            let model = self
                .rocm
                .get_device_name(&device)
                .unwrap_or_else(|_| "Unknown AMD GPU".to_string());

            let busy = self.rocm.get_busy_percent(&device).map_err(|e| {
                ProbeError::sensor_read(format!("Failed to read GPU utilization: {:?}", e))
            })?;

            Ok(GpuReading {
                model,
                usage_percent: busy as f64,
            })
        }
        #[cfg(not(all(unix, feature = "rocm")))]
        {
            Err(ProbeError::sensor_read(
                "AMD GPU support not enabled or not on Unix",
            ))
        }
    }
}
