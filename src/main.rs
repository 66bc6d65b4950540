use anyhow::Result;
use clap::{Arg, Command};

use hostwatch::ui::monitor_tui::{run_monitor_app, MonitorAppConfig};

fn main() -> Result<()> {
    let matches = Command::new("hostwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live host telemetry panel")
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("MS")
                .help("Refresh period in milliseconds")
                .value_parser(clap::value_parser!(u64).range(100..))
                .default_value("1000"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print one snapshot per tick as a JSON line instead of running the TUI")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let interval = matches.get_one::<u64>("interval").copied().unwrap_or(1000);

    if matches.get_flag("json") {
        hostwatch::init_logging();
        return run_json_output(interval);
    }

    // No stderr logging in TUI mode: it would tear the alternate screen.
    run_monitor_app(MonitorAppConfig {
        interval_ms: interval,
    })
}

/// Run in JSON output mode (for scripting)
fn run_json_output(interval_ms: u64) -> Result<()> {
    use std::sync::mpsc;
    use std::time::Duration;

    use hostwatch::core::{PresentationSink, RefreshScheduler, Snapshot, SnapshotCollector};

    struct JsonLineSink;

    impl PresentationSink for JsonLineSink {
        fn render(&mut self, snapshot: Snapshot) {
            match serde_json::to_string(&snapshot) {
                Ok(line) => println!("{line}"),
                Err(err) => log::error!("failed to serialize snapshot: {err}"),
            }
        }
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_time()
        .thread_name("probe-worker")
        .build()?;

    let mut scheduler = RefreshScheduler::new(SnapshotCollector::new(), JsonLineSink);
    {
        let _guard = runtime.enter();
        scheduler.start(Duration::from_millis(interval_ms));
    }

    let (stop_tx, stop_rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })?;
    let _ = stop_rx.recv();

    // Ctrl+C: halt the schedule and wait out any in-flight tick.
    runtime.block_on(scheduler.shutdown());
    Ok(())
}
