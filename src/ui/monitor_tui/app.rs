use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::runtime::MonitorRuntime;
use crate::core::snapshot::Snapshot;

use super::event_handler::MonitorEvent;
use super::render::render_ui;

/// Monitor application state
pub struct MonitorApp {
    pub snapshot: Option<Arc<Snapshot>>,
    pub should_quit: bool,
    pub interval_ms: u64,
}

impl MonitorApp {
    pub fn new(config: &MonitorAppConfig) -> Self {
        Self {
            snapshot: None,
            should_quit: false,
            interval_ms: config.interval_ms,
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: MonitorEvent) {
        match event {
            MonitorEvent::Quit => self.should_quit = true,
            MonitorEvent::None => {}
        }
    }
}

/// Configuration for the monitor app
#[derive(Debug, Clone)]
pub struct MonitorAppConfig {
    pub interval_ms: u64,
}

impl Default for MonitorAppConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

/// Run the monitor TUI application
pub fn run_monitor_app(config: MonitorAppConfig) -> Result<()> {
    // The refresh loop starts before the terminal switches modes so a failed
    // runtime build never leaves the terminal raw.
    let mut runtime = MonitorRuntime::new(Duration::from_millis(config.interval_ms))
        .context("Failed to start monitor runtime")?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = MonitorApp::new(&config);
    let loop_result = run_event_loop(&mut terminal, &mut app, &mut runtime);

    // Stop the schedule before the terminal is torn down: no render call may
    // touch a destroyed surface.
    runtime.shutdown();

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    loop_result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut MonitorApp,
    runtime: &mut MonitorRuntime,
) -> Result<()> {
    loop {
        // Pull the latest snapshot, if a tick landed since the last frame.
        if runtime.snapshot_rx.has_changed().unwrap_or(false) {
            app.snapshot = runtime.snapshot_rx.borrow_and_update().clone();
        }

        terminal.draw(|frame| render_ui(frame, app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100)).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let monitor_event = match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => MonitorEvent::Quit,
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            MonitorEvent::Quit
                        }
                        _ => MonitorEvent::None,
                    };
                    app.handle_event(monitor_event);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
