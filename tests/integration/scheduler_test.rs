//! Scheduling cadence and cancellation behavior.
//!
//! Uses deliberately slow stub probes and a recording sink to observe the
//! collect/render interleaving without a real UI.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use hostwatch::core::{
    shared, FnProbe, PresentationSink, RefreshScheduler, SharedProbe, Snapshot, SnapshotCollector,
};
use hostwatch::core::{CpuReading, MemoryReading};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    CollectStart,
    Render,
}

struct RecordingSink {
    events: Arc<Mutex<Vec<Step>>>,
}

impl PresentationSink for RecordingSink {
    fn render(&mut self, _snapshot: Snapshot) {
        self.events.lock().push(Step::Render);
    }
}

/// Collector whose CPU probe records its start and sleeps for `delay`.
fn instrumented_collector(events: Arc<Mutex<Vec<Step>>>, delay: Duration) -> SnapshotCollector {
    let cpu: SharedProbe<CpuReading> = shared(FnProbe(move || {
        events.lock().push(Step::CollectStart);
        std::thread::sleep(delay);
        Ok(CpuReading {
            model: "stub".to_string(),
            usage_percent: 10.0,
        })
    }));

    SnapshotCollector::with_probes(
        shared(FnProbe(|| Ok("10.0.0.1".to_string()))),
        cpu,
        shared(FnProbe(|| {
            Ok(MemoryReading {
                total_bytes: 1_000_000_000,
                usage_percent: 50.0,
            })
        })),
        None,
    )
}

fn render_count(events: &Arc<Mutex<Vec<Step>>>) -> usize {
    events.lock().iter().filter(|s| **s == Step::Render).count()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_renders_recur_while_running() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let collector = instrumented_collector(events.clone(), Duration::ZERO);
    let sink = RecordingSink {
        events: events.clone(),
    };

    let mut scheduler = RefreshScheduler::new(collector, sink);
    scheduler.start(Duration::from_millis(20));

    tokio::time::sleep(Duration::from_millis(150)).await;
    scheduler.shutdown().await;

    assert!(
        render_count(&events) >= 3,
        "expected recurring renders, got {:?}",
        events.lock()
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_slow_tick_never_overlaps() {
    let events = Arc::new(Mutex::new(Vec::new()));
    // Probe runs well past the period: ticks must be deferred, not stacked.
    let collector = instrumented_collector(events.clone(), Duration::from_millis(120));
    let sink = RecordingSink {
        events: events.clone(),
    };

    let mut scheduler = RefreshScheduler::new(collector, sink);
    scheduler.start(Duration::from_millis(50));

    tokio::time::sleep(Duration::from_millis(500)).await;
    scheduler.shutdown().await;

    let recorded = events.lock().clone();
    assert!(recorded.len() >= 4, "too few events: {recorded:?}");

    // Strict alternation: a collection only ever starts after the previous
    // tick's render has returned.
    for pair in recorded.windows(2) {
        assert_ne!(pair[0], pair[1], "overlapping cycles: {recorded:?}");
    }
    assert_eq!(recorded[0], Step::CollectStart);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_no_render_after_stop() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let collector = instrumented_collector(events.clone(), Duration::ZERO);
    let sink = RecordingSink {
        events: events.clone(),
    };

    let mut scheduler = RefreshScheduler::new(collector, sink);
    scheduler.start(Duration::from_millis(25));

    tokio::time::sleep(Duration::from_millis(80)).await;
    scheduler.shutdown().await;
    let after_stop = render_count(&events);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(render_count(&events), after_stop);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tick_in_flight_at_stop_never_renders() {
    let events = Arc::new(Mutex::new(Vec::new()));
    // One collection takes 200ms; stop lands in the middle of it.
    let collector = instrumented_collector(events.clone(), Duration::from_millis(200));
    let sink = RecordingSink {
        events: events.clone(),
    };

    let mut scheduler = RefreshScheduler::new(collector, sink);
    scheduler.start(Duration::from_millis(30));

    tokio::time::sleep(Duration::from_millis(50)).await;
    scheduler.stop();
    // shutdown waits for the in-flight tick to finish its collection.
    scheduler.shutdown().await;

    assert_eq!(
        render_count(&events),
        0,
        "in-flight tick rendered after stop: {:?}",
        events.lock()
    );
}
