//! Main render orchestration

use ratatui::widgets::TableState;
use ratatui::Frame;

use crate::model::types::Tab;
use crate::App;

use super::{dialogs, file_list, help, layout, search, status_bar, tabs, template_view, toast};

/// Orchestrates all UI rendering for one frame.
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let with_search = app.model.ui.active_tab == Tab::Files;
    let layout_info = layout::calculate_layout(size, with_search);

    tabs::render_tabs(f, layout_info.tabs_area, app.model.ui.active_tab);

    match app.model.ui.active_tab {
        Tab::Files => {
            let mut state = TableState::default();
            state.select(app.model.files.selected);
            file_list::render_file_table(
                f,
                layout_info.main_area,
                &app.model.files.entries,
                &app.model.files.visible,
                &mut state,
                app.model.files.entries.len(),
            );
            // Sync back the selection
            app.model.files.selected = state.selected();
        }
        Tab::Templates => {
            template_view::render_template_view(f, layout_info.main_area, &app.model.templates);
        }
        Tab::Help => {
            help::render_help(f, layout_info.main_area);
        }
    }

    if let Some(search_area) = layout_info.search_area {
        search::render_search_input(
            f,
            search_area,
            &app.model.ui.search_query,
            app.model.ui.search_mode,
            app.model.files.visible.len(),
        );
    }

    let pending_renames = app
        .model
        .files
        .entries
        .iter()
        .filter(|entry| entry.preview.is_some())
        .count();

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        app.model.files.visible.len(),
        app.model.files.entries.len(),
        pending_renames,
        &app.model.templates.active_template().name,
        app.model.history.undo_len(),
        app.model.history.redo_len(),
        app.model.ui.last_error_kind,
    );

    // Overlays
    if let Some(prompt) = &app.model.ui.input_prompt {
        dialogs::render_input_prompt(f, prompt);
    }

    if let Some(planned) = &app.model.ui.confirm_apply {
        dialogs::render_apply_confirmation(f, planned);
    }

    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
