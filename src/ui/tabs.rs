//! Tab bar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Tabs,
    Frame,
};

use crate::model::types::Tab;

pub fn render_tabs(f: &mut Frame, area: Rect, active: Tab) {
    let titles = Tab::ALL.iter().map(|tab| tab.title());

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    f.render_widget(tabs, area);
}
