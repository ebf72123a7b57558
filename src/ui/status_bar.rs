//! Status bar
//!
//! One line at the bottom: entry counts, pending renames, the active
//! template, undo/redo depth and the last classified error kind.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::logic::errors::ErrorKind;

pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    visible: usize,
    total: usize,
    pending_renames: usize,
    template_name: &str,
    undo_depth: usize,
    redo_depth: usize,
    last_error: Option<ErrorKind>,
) {
    let mut spans = vec![
        Span::styled(
            format!(" {}/{} files ", visible, total),
            Style::default().fg(Color::White),
        ),
        Span::raw("| "),
        Span::styled(
            format!("{} to rename ", pending_renames),
            Style::default().fg(if pending_renames > 0 {
                Color::Cyan
            } else {
                Color::DarkGray
            }),
        ),
        Span::raw("| template: "),
        Span::styled(template_name.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(format!(" | undo:{} redo:{} ", undo_depth, redo_depth)),
    ];

    if let Some(kind) = last_error {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("last error: {} ", kind.as_str()),
            Style::default().fg(Color::Red),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    f.render_widget(bar, area);
}
