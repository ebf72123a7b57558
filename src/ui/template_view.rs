//! Templates tab
//!
//! Left: the template list with the active one highlighted.
//! Right: the active template's fields and the editing key hints.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::templates::TemplatesModel;

pub fn render_template_view(f: &mut Frame, area: Rect, model: &TemplatesModel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    render_template_list(f, chunks[0], model);
    render_template_details(f, chunks[1], model);
}

fn render_template_list(f: &mut Frame, area: Rect, model: &TemplatesModel) {
    let items: Vec<ListItem> = model
        .templates
        .iter()
        .map(|template| ListItem::new(template.name.clone()))
        .collect();

    let mut state = ListState::default();
    state.select(Some(model.active));

    let title = if model.dirty {
        " Templates (unsaved) "
    } else {
        " Templates "
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    f.render_stateful_widget(list, area, &mut state);
}

fn render_template_details(f: &mut Frame, area: Rect, model: &TemplatesModel) {
    let template = model.active_template();

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), Style::default().fg(Color::Yellow)),
            Span::raw(value),
        ])
    };

    let lines = vec![
        field("Name", template.name.clone()),
        field("Prefix", template.prefix.clone()),
        field("Suffix", template.suffix.clone()),
        field(
            "Body",
            template.body.clone().unwrap_or_else(|| "{name}".to_string()),
        ),
        field("Counter start", template.counter_start.to_string()),
        field("Counter pad", template.counter_pad.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Tokens: {name} {ext} {counter} {date} {mtime} {size} {parent}",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "n:New  r:Rename  p:Prefix  s:Suffix  b:Body  d:Delete  Ctrl+S:Save",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let details = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Active template "))
        .wrap(Wrap { trim: false });

    f.render_widget(details, area);
}
