//! Dialogs
//!
//! The shared input prompt and the apply confirmation, both centered
//! overlays cleared against the background.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::types::{InputPromptState, PlannedRename};

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the shared text input prompt.
pub fn render_input_prompt(f: &mut Frame, prompt: &InputPromptState) {
    let area = f.area();
    let prompt_area = centered(area, 60, 5);

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = Line::from(vec![
        Span::raw("> "),
        Span::raw(prompt.buffer.clone()),
        Span::styled("█", cursor_style),
    ]);

    let body = Paragraph::new(vec![
        input_line,
        Line::from(Span::styled(
            "Enter to confirm, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", prompt.purpose.title()))
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, prompt_area);
    f.render_widget(body, prompt_area);
}

/// Render the batch confirmation dialog before executing renames.
pub fn render_apply_confirmation(f: &mut Frame, planned: &[PlannedRename]) {
    let shown: Vec<String> = planned
        .iter()
        .take(5)
        .map(|plan| {
            format!(
                "  {} → {}",
                plan.from
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                plan.target_name
            )
        })
        .collect();

    let more_text = if planned.len() > 5 {
        format!("\n  ... and {} more", planned.len() - 5)
    } else {
        String::new()
    };

    let prompt_text = format!(
        "Rename {} file(s)?\n\n{}{}\n\nContinue? (y/n)",
        planned.len(),
        shown.join("\n"),
        more_text
    );

    let area = f.area();
    let height = 9 + shown.len() as u16;
    let prompt_area = centered(area, 64, height);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm Rename ")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
