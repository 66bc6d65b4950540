//! Fixed-period refresh loop driving collection and rendering.
//!
//! The scheduler is an explicit state machine so the cadence logic is
//! testable without a real UI.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::core::collector::SnapshotCollector;
use crate::core::snapshot::Snapshot;

/// Consumes one snapshot per tick.
///
/// Render surfaces implement this; the scheduler treats it as an opaque,
/// fire-and-continue consumer and renders degraded fields like any others.
pub trait PresentationSink: Send {
    fn render(&mut self, snapshot: Snapshot);
}

/// Scheduler lifecycle. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

/// Drives collect-and-render cycles at a fixed wall-clock period.
///
/// At most one cycle is ever in flight: ticks are scheduled relative to the
/// start of the current tick, and a tick that runs past the period defers
/// the next one, which then fires once, immediately. Ticks are never
/// skipped or batched to catch up.
pub struct RefreshScheduler<S: PresentationSink + 'static> {
    state: SchedulerState,
    cancel_tx: watch::Sender<bool>,
    cancel_rx: watch::Receiver<bool>,
    parts: Option<(SnapshotCollector, S)>,
    handle: Option<JoinHandle<()>>,
}

impl<S: PresentationSink + 'static> RefreshScheduler<S> {
    pub fn new(collector: SnapshotCollector, sink: S) -> Self {
        let (cancel_tx, cancel_rx) = watch::channel(false);
        Self {
            state: SchedulerState::Idle,
            cancel_tx,
            cancel_rx,
            parts: Some((collector, sink)),
            handle: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Begin firing cycles every `period`; the first tick fires immediately.
    ///
    /// Only valid from `Idle`; any other state is a no-op. Must be called
    /// from within a tokio runtime.
    pub fn start(&mut self, period: Duration) {
        if self.state != SchedulerState::Idle {
            log::warn!("refresh scheduler started from {:?}, ignoring", self.state);
            return;
        }
        if let Some((collector, sink)) = self.parts.take() {
            let cancel_rx = self.cancel_rx.clone();
            self.handle = Some(tokio::spawn(tick_loop(collector, sink, period, cancel_rx)));
            self.state = SchedulerState::Running;
            log::debug!("refresh scheduler running with period {period:?}");
        }
    }

    /// Halt further ticks. Idempotent.
    ///
    /// An in-flight collection is allowed to finish, but it re-checks the
    /// cancel flag before touching the sink, so no render follows a stop.
    pub fn stop(&mut self) {
        if self.state == SchedulerState::Running {
            log::debug!("refresh scheduler stopping");
        }
        let _ = self.cancel_tx.send(true);
        self.state = SchedulerState::Stopped;
    }

    /// Stop and wait for the tick task to wind down.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

async fn tick_loop<S: PresentationSink>(
    collector: SnapshotCollector,
    mut sink: S,
    period: Duration,
    mut cancel: watch::Receiver<bool>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.changed() => break,
            _ = ticker.tick() => {
                let snapshot = collector.collect().await;
                // stop() may have landed while the probes were running.
                if *cancel.borrow() {
                    break;
                }
                sink.render(snapshot);
            }
        }
    }
}
