//! Core telemetry collection: probes, snapshots, and the refresh loop.
//!
//! This module provides the business logic for sampling host telemetry and
//! driving the periodic collect-and-render cycle.

pub mod collector;
pub mod probes;
pub mod runtime;
pub mod scheduler;
pub mod snapshot;

pub use collector::{shared, SharedProbe, SnapshotCollector};
pub use probes::{AddressProbe, CpuProbe, FnProbe, GpuProbe, MemoryProbe, SensorProbe};
pub use runtime::{ChannelSink, MonitorRuntime};
pub use scheduler::{PresentationSink, RefreshScheduler, SchedulerState};
pub use snapshot::{CpuReading, GpuReading, GpuStatus, MemoryReading, Snapshot};
