//! File table
//!
//! The Files tab: one row per visible entry showing the current name,
//! the previewed target, size, modified time and markers.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::logic::formatting::{format_bytes, format_mtime, truncate_name};
use crate::model::types::{EntryStatus, FileEntry};

/// Status marker and its color for one entry.
fn status_span(status: EntryStatus) -> Span<'static> {
    match status {
        EntryStatus::Pending => Span::styled("·", Style::default().fg(Color::DarkGray)),
        EntryStatus::Renamed => Span::styled("✓", Style::default().fg(Color::Green)),
        EntryStatus::Skipped => Span::styled("⚠", Style::default().fg(Color::Yellow)),
        EntryStatus::Failed(_) => Span::styled("✗", Style::default().fg(Color::Red)),
    }
}

pub fn render_file_table(
    f: &mut Frame,
    area: Rect,
    entries: &[FileEntry],
    visible: &[usize],
    state: &mut TableState,
    total: usize,
) {
    // Rough per-name budget: half the flexible space each
    let name_budget = ((area.width.saturating_sub(40)) / 2).max(12) as usize;

    let rows: Vec<Row> = visible
        .iter()
        .filter_map(|&idx| entries.get(idx))
        .map(|entry| {
            let preview = match (&entry.preview, entry.status) {
                (_, EntryStatus::Failed(kind)) => Span::styled(
                    kind.as_str().to_string(),
                    Style::default().fg(Color::Red),
                ),
                (Some(preview), _) => Span::styled(
                    truncate_name(preview, name_budget),
                    Style::default().fg(Color::Cyan),
                ),
                (None, _) => Span::styled("(unchanged)", Style::default().fg(Color::DarkGray)),
            };

            let pdf_marker = if entry.has_pdf_sibling { "pdf" } else { "" };

            Row::new(vec![
                Cell::from(status_span(entry.status)),
                Cell::from(truncate_name(&entry.file_name, name_budget)),
                Cell::from("→"),
                Cell::from(preview),
                Cell::from(format_bytes(entry.size)),
                Cell::from(format_mtime(entry.modified)),
                Cell::from(Span::styled(pdf_marker, Style::default().fg(Color::Magenta))),
            ])
        })
        .collect();

    let title = if visible.len() == total {
        format!(" Files ({}) ", total)
    } else {
        format!(" Files ({} of {}) ", visible.len(), total)
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Percentage(35),
            Constraint::Length(1),
            Constraint::Percentage(35),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(3),
        ],
    )
    .header(
        Row::new(vec!["", "Name", "", "Preview", "Size", "Modified", ""])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(title))
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("► ");

    f.render_stateful_widget(table, area, state);
}
