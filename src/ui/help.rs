//! Help tab
//!
//! Full hotkey reference, grouped the way the actions are used.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key_line(key: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<16}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(action.to_string()),
    ])
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

pub fn render_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        section("Files"),
        key_line("Ctrl+Shift+A", "Add files (path or glob pattern)"),
        key_line("Ctrl+O", "Add folder"),
        key_line("Delete", "Remove selected entry from the list"),
        key_line("F5", "Refresh the list and previews"),
        key_line("Ctrl+F", "Focus search"),
        Line::from(""),
        section("Renaming"),
        key_line("Ctrl+R", "Apply the active template (batch rename)"),
        key_line("Ctrl+Z", "Undo the last batch"),
        key_line("Ctrl+Y / Ctrl+Shift+Z", "Redo the undone batch"),
        Line::from(""),
        section("Templates"),
        key_line("Ctrl+S", "Save templates"),
        key_line("n / r / d", "New, rename, delete template (Templates tab)"),
        key_line("p / s / b", "Edit prefix, suffix, body (Templates tab)"),
        Line::from(""),
        section("General"),
        key_line("Tab / Shift+Tab", "Switch tabs"),
        key_line("↑/↓ PgUp/PgDn", "Navigate lists"),
        key_line("Esc", "Dismiss prompt / clear search"),
        key_line("q", "Quit"),
    ];

    let help = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(help, area);
}
