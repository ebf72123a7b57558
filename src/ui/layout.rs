//! Screen layout
//!
//! Splits the terminal into the tab bar, the main pane, the search box
//! (Files tab only) and the status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct LayoutInfo {
    pub tabs_area: Rect,
    pub main_area: Rect,
    pub search_area: Option<Rect>,
    pub status_area: Rect,
}

pub fn calculate_layout(size: Rect, with_search: bool) -> LayoutInfo {
    if with_search {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);
        LayoutInfo {
            tabs_area: chunks[0],
            main_area: chunks[1],
            search_area: Some(chunks[2]),
            status_area: chunks[3],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(size);
        LayoutInfo {
            tabs_area: chunks[0],
            main_area: chunks[1],
            search_area: None,
            status_area: chunks[2],
        }
    }
}
