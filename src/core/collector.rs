use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use tokio::task;

use crate::core::probes::{AddressProbe, CpuProbe, GpuProbe, MemoryProbe, SensorProbe};
use crate::core::snapshot::{CpuReading, GpuReading, GpuStatus, MemoryReading, Snapshot};
use crate::error::ProbeError;

/// Shared handle to a probe, so each tick can run it on a blocking task.
pub type SharedProbe<T> = Arc<Mutex<dyn SensorProbe<T>>>;

/// Wrap a probe for use with a [`SnapshotCollector`].
pub fn shared<T, P>(probe: P) -> SharedProbe<T>
where
    P: SensorProbe<T> + 'static,
{
    Arc::new(Mutex::new(probe))
}

/// Invokes the four probes once per tick and assembles a [`Snapshot`].
///
/// Each probe runs on its own short-lived blocking task; all four are joined
/// before the snapshot exists. One probe's failure never affects the others,
/// and collection itself cannot fail.
pub struct SnapshotCollector {
    address: SharedProbe<String>,
    cpu: SharedProbe<CpuReading>,
    memory: SharedProbe<MemoryReading>,
    gpu: Option<SharedProbe<GpuReading>>,
}

impl SnapshotCollector {
    /// Create a collector over the real OS probes.
    ///
    /// GPU capability detection happens here, once; a host without any GPU
    /// query backend reports `Unavailable` for the process lifetime.
    pub fn new() -> Self {
        Self {
            address: shared(AddressProbe::new()),
            cpu: shared(CpuProbe::new()),
            memory: shared(MemoryProbe::new()),
            gpu: GpuProbe::detect().map(shared),
        }
    }

    /// Build a collector from explicit probe implementations.
    ///
    /// `gpu: None` models a host with no GPU query capability.
    pub fn with_probes(
        address: SharedProbe<String>,
        cpu: SharedProbe<CpuReading>,
        memory: SharedProbe<MemoryReading>,
        gpu: Option<SharedProbe<GpuReading>>,
    ) -> Self {
        Self {
            address,
            cpu,
            memory,
            gpu,
        }
    }

    /// Collect one snapshot. Waits for all probes; never fails.
    pub async fn collect(&self) -> Snapshot {
        let gpu_probe = self.gpu.clone();
        let gpu_field = async move {
            match gpu_probe {
                Some(probe) => match dispatch(probe).await.and_then(GpuReading::validated) {
                    Ok(reading) => GpuStatus::Ready(reading),
                    Err(err) => GpuStatus::Failed(err),
                },
                None => GpuStatus::Unavailable,
            }
        };

        let (address, cpu, memory, gpu) = tokio::join!(
            dispatch(self.address.clone()),
            dispatch(self.cpu.clone()),
            dispatch(self.memory.clone()),
            gpu_field,
        );

        let cpu = cpu.and_then(CpuReading::validated);
        let memory = memory.and_then(MemoryReading::validated);

        if let Err(err) = &address {
            log::warn!("address probe failed: {err}");
        }
        if let Err(err) = &cpu {
            log::warn!("CPU probe failed: {err}");
        }
        if let Err(err) = &memory {
            log::warn!("memory probe failed: {err}");
        }
        if let GpuStatus::Failed(err) = &gpu {
            log::warn!("GPU probe failed: {err}");
        }

        Snapshot {
            taken_at: Utc::now().timestamp(),
            address,
            cpu,
            memory,
            gpu,
        }
    }
}

impl Default for SnapshotCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one probe on a blocking task.
///
/// A panicking probe is contained here and reported as a failed read.
async fn dispatch<T>(probe: SharedProbe<T>) -> Result<T, ProbeError>
where
    T: Send + 'static,
{
    match task::spawn_blocking(move || probe.lock().probe()).await {
        Ok(result) => result,
        Err(err) => Err(ProbeError::sensor_read(format!("probe task failed: {err}"))),
    }
}
