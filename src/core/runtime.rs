//! Tokio runtime and plumbing between the refresh loop and the UI thread.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::core::collector::SnapshotCollector;
use crate::core::scheduler::{PresentationSink, RefreshScheduler};
use crate::core::snapshot::Snapshot;
use crate::error::Result;

/// Sink that publishes each snapshot to the UI thread over a watch channel.
pub struct ChannelSink {
    tx: watch::Sender<Option<Arc<Snapshot>>>,
}

impl ChannelSink {
    pub fn new(tx: watch::Sender<Option<Arc<Snapshot>>>) -> Self {
        Self { tx }
    }
}

impl PresentationSink for ChannelSink {
    fn render(&mut self, snapshot: Snapshot) {
        // send() only fails with no receivers, which means the UI is gone.
        let _ = self.tx.send(Some(Arc::new(snapshot)));
    }
}

/// Owns the background runtime driving the refresh loop.
///
/// The UI thread reads the latest snapshot from `snapshot_rx`; the initial
/// `None` is the "still fetching" state before the first tick lands.
pub struct MonitorRuntime {
    /// Receiver for snapshots, updated once per tick.
    pub snapshot_rx: watch::Receiver<Option<Arc<Snapshot>>>,

    scheduler: RefreshScheduler<ChannelSink>,
    runtime: tokio::runtime::Runtime,
}

impl MonitorRuntime {
    /// Build the runtime and start collect-and-render cycles on `period`.
    pub fn new(period: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .thread_name("probe-worker")
            .build()?;

        let (snapshot_tx, snapshot_rx) = watch::channel(None);
        let collector = SnapshotCollector::new();
        let mut scheduler = RefreshScheduler::new(collector, ChannelSink::new(snapshot_tx));
        {
            let _guard = runtime.enter();
            scheduler.start(period);
        }

        Ok(Self {
            snapshot_rx,
            scheduler,
            runtime,
        })
    }

    /// Stop the refresh loop and wait out any in-flight tick.
    ///
    /// After this returns, no render can touch the (about to be torn down)
    /// presentation surface.
    pub fn shutdown(self) {
        let MonitorRuntime {
            snapshot_rx,
            scheduler,
            runtime,
        } = self;
        runtime.block_on(scheduler.shutdown());
        drop(snapshot_rx);
    }
}
