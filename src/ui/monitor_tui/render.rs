use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use super::app::MonitorApp;
use super::widgets::colored_gauge;
use crate::core::snapshot::{GpuStatus, Snapshot};
use crate::ui::formatters::{snapshot_rows, FETCHING, FIELD_LABELS};

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &MonitorApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(6), // Field table
            Constraint::Length(3), // Utilization gauges
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_fields(frame, chunks[0], app);
    render_gauges(frame, chunks[1], app);
    render_footer(frame, chunks[3], app);
}

/// Render the field-name / value table
fn render_fields(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let label_style = Style::default().add_modifier(Modifier::BOLD);

    let rows: Vec<Row> = match &app.snapshot {
        Some(snapshot) => snapshot_rows(snapshot)
            .into_iter()
            .map(|(label, value)| {
                Row::new(vec![
                    Cell::from(Span::styled(label, label_style)),
                    Cell::from(value),
                ])
            })
            .collect(),
        None => FIELD_LABELS
            .iter()
            .map(|label| {
                Row::new(vec![
                    Cell::from(Span::styled(*label, label_style)),
                    Cell::from(FETCHING),
                ])
            })
            .collect(),
    };

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(0)])
        .block(Block::default().title(" System Monitor ").borders(Borders::ALL));

    frame.render_widget(table, area);
}

/// Render CPU / RAM / GPU utilization gauges
fn render_gauges(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let block = Block::default().title(" Utilization ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = app.snapshot.as_deref() else {
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    let (cpu_value, cpu_label) = usage_gauge_parts("CPU", cpu_usage(snapshot));
    let (mem_value, mem_label) = usage_gauge_parts("RAM", memory_usage(snapshot));
    let (gpu_value, gpu_label) = usage_gauge_parts("GPU", gpu_usage(snapshot));

    frame.render_widget(colored_gauge(cpu_value, &cpu_label), cols[0]);
    frame.render_widget(colored_gauge(mem_value, &mem_label), cols[1]);
    frame.render_widget(colored_gauge(gpu_value, &gpu_label), cols[2]);
}

fn usage_gauge_parts(name: &str, usage: Option<f64>) -> (f64, String) {
    match usage {
        Some(value) => (value, format!("{} {:.1}%", name, value)),
        None => (0.0, format!("{} N/A", name)),
    }
}

fn cpu_usage(snapshot: &Snapshot) -> Option<f64> {
    snapshot.cpu.as_ref().ok().map(|r| r.usage_percent)
}

fn memory_usage(snapshot: &Snapshot) -> Option<f64> {
    snapshot.memory.as_ref().ok().map(|r| r.usage_percent)
}

fn gpu_usage(snapshot: &Snapshot) -> Option<f64> {
    match &snapshot.gpu {
        GpuStatus::Ready(reading) => Some(reading.usage_percent),
        _ => None,
    }
}

/// Render the footer with key hints
fn render_footer(frame: &mut Frame, area: Rect, app: &MonitorApp) {
    let footer = Paragraph::new(format!(
        " q: quit │ refresh: {}ms ",
        app.interval_ms
    ))
    .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(footer, area);
}
