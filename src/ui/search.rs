//! Search Input UI
//!
//! Renders the search input box with query, match count, and cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render search input box above the status bar
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: usize,
) {
    let title = if active {
        format!(" Search ({} matches) - Esc to cancel ", match_count)
    } else if !query.is_empty() {
        format!(" Search ({} matches) - Esc to clear ", match_count)
    } else {
        " Search (Ctrl+F) ".to_string()
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Filter: "),
            Span::raw(query.to_string()),
            Span::styled("█", cursor_style),
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Filter: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    let paragraph = Paragraph::new(vec![input_line]).block(block);

    f.render_widget(paragraph, area);
}
