//! Degraded-collection behavior of SnapshotCollector.
//!
//! A snapshot always carries exactly one state per field; one probe's fault
//! never bleeds into its neighbors.

use hostwatch::core::{shared, FnProbe, GpuStatus, SharedProbe, SnapshotCollector};
use hostwatch::core::{CpuReading, GpuReading, MemoryReading};
use hostwatch::error::ProbeError;
use hostwatch::ui::snapshot_rows;

fn address_stub() -> SharedProbe<String> {
    shared(FnProbe(|| Ok("192.168.1.42".to_string())))
}

fn cpu_stub() -> SharedProbe<CpuReading> {
    shared(FnProbe(|| {
        Ok(CpuReading {
            model: "Intel Core i7".to_string(),
            usage_percent: 37.5,
        })
    }))
}

fn memory_stub() -> SharedProbe<MemoryReading> {
    shared(FnProbe(|| {
        Ok(MemoryReading {
            total_bytes: 16_000_000_000,
            usage_percent: 62.0,
        })
    }))
}

fn gpu_stub() -> SharedProbe<GpuReading> {
    shared(FnProbe(|| {
        Ok(GpuReading {
            model: "GeForce RTX 3060".to_string(),
            usage_percent: 12.0,
        })
    }))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_collect_has_one_state_per_field() {
    let collector =
        SnapshotCollector::with_probes(address_stub(), cpu_stub(), memory_stub(), Some(gpu_stub()));

    let snapshot = collector.collect().await;

    assert_eq!(snapshot.address.as_deref(), Ok("192.168.1.42"));
    assert_eq!(
        snapshot.cpu,
        Ok(CpuReading {
            model: "Intel Core i7".to_string(),
            usage_percent: 37.5,
        })
    );
    assert_eq!(
        snapshot.memory,
        Ok(MemoryReading {
            total_bytes: 16_000_000_000,
            usage_percent: 62.0,
        })
    );
    assert_eq!(
        snapshot.gpu,
        GpuStatus::Ready(GpuReading {
            model: "GeForce RTX 3060".to_string(),
            usage_percent: 12.0,
        })
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_end_to_end_display_rows() {
    // A host with good address, CPU and memory readings and no GPU query
    // capability at all.
    let collector =
        SnapshotCollector::with_probes(address_stub(), cpu_stub(), memory_stub(), None);

    let snapshot = collector.collect().await;
    let rows = snapshot_rows(&snapshot);

    assert_eq!(rows[0].1, "192.168.1.42");
    assert_eq!(rows[1].1, "Intel Core i7 (37.5%)");
    assert_eq!(rows[2].1, "62.0% of 16.0 GB");
    assert_eq!(rows[3].1, "N/A");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_memory_failure_leaves_other_fields_intact() {
    let memory: SharedProbe<MemoryReading> = shared(FnProbe(|| {
        Err(ProbeError::sensor_read("virtual memory query fault"))
    }));
    let collector =
        SnapshotCollector::with_probes(address_stub(), cpu_stub(), memory, Some(gpu_stub()));

    let snapshot = collector.collect().await;

    assert!(matches!(snapshot.memory, Err(ProbeError::SensorRead(_))));
    assert_eq!(snapshot.address.as_deref(), Ok("192.168.1.42"));
    assert!(snapshot.cpu.is_ok());
    assert!(matches!(snapshot.gpu, GpuStatus::Ready(_)));

    // The failed field renders N/A without blanking the others.
    let rows = snapshot_rows(&snapshot);
    assert_eq!(rows[2].1, "N/A (sensor read failed)");
    assert_eq!(rows[1].1, "Intel Core i7 (37.5%)");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_out_of_range_usage_is_surfaced_not_clamped() {
    let cpu: SharedProbe<CpuReading> = shared(FnProbe(|| {
        Ok(CpuReading {
            model: "Intel Core i7".to_string(),
            usage_percent: 250.0,
        })
    }));
    let memory: SharedProbe<MemoryReading> = shared(FnProbe(|| {
        Ok(MemoryReading {
            total_bytes: 16_000_000_000,
            usage_percent: f64::NAN,
        })
    }));
    let collector = SnapshotCollector::with_probes(address_stub(), cpu, memory, None);

    let snapshot = collector.collect().await;

    assert!(matches!(snapshot.cpu, Err(ProbeError::SensorRead(_))));
    assert!(matches!(snapshot.memory, Err(ProbeError::SensorRead(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_missing_gpu_capability_is_unavailable_not_failed() {
    let without_capability =
        SnapshotCollector::with_probes(address_stub(), cpu_stub(), memory_stub(), None);
    let snapshot = without_capability.collect().await;
    assert_eq!(snapshot.gpu, GpuStatus::Unavailable);

    let failing_gpu: SharedProbe<GpuReading> =
        shared(FnProbe(|| Err(ProbeError::sensor_read("driver fault"))));
    let with_failing_capability = SnapshotCollector::with_probes(
        address_stub(),
        cpu_stub(),
        memory_stub(),
        Some(failing_gpu),
    );
    let snapshot = with_failing_capability.collect().await;
    assert!(matches!(snapshot.gpu, GpuStatus::Failed(_)));
    assert!(!snapshot.gpu.is_unavailable());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_panicking_probe_is_contained() {
    let address: SharedProbe<String> =
        shared(FnProbe(|| panic!("address backend exploded")));
    let collector =
        SnapshotCollector::with_probes(address, cpu_stub(), memory_stub(), Some(gpu_stub()));

    let snapshot = collector.collect().await;

    assert!(matches!(snapshot.address, Err(ProbeError::SensorRead(_))));
    assert!(snapshot.cpu.is_ok());
    assert!(snapshot.memory.is_ok());
    assert!(matches!(snapshot.gpu, GpuStatus::Ready(_)));
}
