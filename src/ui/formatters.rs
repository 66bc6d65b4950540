//! Display-string formatting for snapshot fields.
//!
//! Every field renders to exactly one string per tick: the reading, or
//! `N/A` with a short cause for failed/unavailable fields. Fields degrade
//! independently; a failure never blanks a neighbor.

use crate::core::snapshot::{CpuReading, GpuStatus, MemoryReading, Snapshot};
use crate::error::ProbeError;

/// Panel labels, in display order.
pub const FIELD_LABELS: [&str; 4] = ["IP Address", "CPU", "Memory", "GPU"];

/// Placeholder shown before the first snapshot arrives.
pub const FETCHING: &str = "Fetching...";

/// Map a snapshot to its field-name / display-string rows.
pub fn snapshot_rows(snapshot: &Snapshot) -> Vec<(&'static str, String)> {
    vec![
        (FIELD_LABELS[0], address_cell(&snapshot.address)),
        (FIELD_LABELS[1], cpu_cell(&snapshot.cpu)),
        (FIELD_LABELS[2], memory_cell(&snapshot.memory)),
        (FIELD_LABELS[3], gpu_cell(&snapshot.gpu)),
    ]
}

pub fn address_cell(address: &Result<String, ProbeError>) -> String {
    match address {
        Ok(addr) => addr.clone(),
        Err(err) => degraded(err),
    }
}

pub fn cpu_cell(cpu: &Result<CpuReading, ProbeError>) -> String {
    match cpu {
        Ok(reading) => format!("{} ({:.1}%)", reading.model, reading.usage_percent),
        Err(err) => degraded(err),
    }
}

pub fn memory_cell(memory: &Result<MemoryReading, ProbeError>) -> String {
    match memory {
        Ok(reading) => format!(
            "{:.1}% of {}",
            reading.usage_percent,
            format_total_ram(reading.total_bytes)
        ),
        Err(err) => degraded(err),
    }
}

pub fn gpu_cell(gpu: &GpuStatus) -> String {
    match gpu {
        GpuStatus::Ready(reading) => {
            format!("{} ({:.1}%)", reading.model, reading.usage_percent)
        }
        GpuStatus::Failed(err) => degraded(err),
        GpuStatus::Unavailable => "N/A".to_string(),
    }
}

fn degraded(err: &ProbeError) -> String {
    format!("N/A ({})", err.label())
}

/// Format a memory capacity in decimal units (B, KB, MB, GB, TB)
pub fn format_total_ram(bytes: u64) -> String {
    const KB: f64 = 1_000.0;
    const MB: f64 = 1_000_000.0;
    const GB: f64 = 1_000_000_000.0;
    const TB: f64 = 1_000_000_000_000.0;

    let bytes = bytes as f64;
    if bytes >= TB {
        format!("{:.1} TB", bytes / TB)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} B", bytes)
    }
}
