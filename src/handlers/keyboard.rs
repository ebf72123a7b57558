//! Keyboard Input Handler
//!
//! Dispatches every key event. Modal surfaces (input prompt, apply
//! confirmation, search box) capture keys first; then the global hotkey
//! table; then per-tab navigation.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::types::{InputPurpose, Tab};
use crate::App;

/// How far PageUp/PageDown jump in the file table.
const PAGE_JUMP: usize = 20;

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Input prompt captures everything while open
    if app.model.ui.input_prompt.is_some() {
        handle_prompt_key(app, key);
        return Ok(());
    }

    // Apply confirmation: y/n only
    if app.model.ui.confirm_apply.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if let Some(planned) = app.model.ui.confirm_apply.take() {
                    app.execute_renames(planned);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.model.ui.confirm_apply = None;
                app.model.show_toast("Rename cancelled".to_string());
            }
            _ => {}
        }
        return Ok(());
    }

    // Active search input
    if app.model.ui.search_mode {
        match key.code {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Enter => app.model.ui.search_mode = false,
            KeyCode::Backspace => {
                app.model.ui.search_query.pop();
                app.apply_search_filter();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.model.ui.search_query.push(c);
                app.apply_search_filter();
            }
            // Allow list navigation while the filter is live
            KeyCode::Down => app.model.files.select_next(),
            KeyCode::Up => app.model.files.select_previous(),
            _ => {}
        }
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    // Global hotkeys
    if ctrl {
        if let KeyCode::Char(c) = key.code {
            match c.to_ascii_lowercase() {
                'a' if shift => {
                    app.model.ui.open_prompt(InputPurpose::AddFiles);
                    return Ok(());
                }
                'o' => {
                    app.model.ui.open_prompt(InputPurpose::AddFolder);
                    return Ok(());
                }
                'z' if shift => {
                    app.redo_rename();
                    return Ok(());
                }
                'z' => {
                    app.undo_rename();
                    return Ok(());
                }
                'y' => {
                    app.redo_rename();
                    return Ok(());
                }
                'f' => {
                    app.model.ui.active_tab = Tab::Files;
                    app.model.ui.search_mode = true;
                    return Ok(());
                }
                'r' => {
                    app.request_apply();
                    return Ok(());
                }
                's' => {
                    app.save_template_quick();
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Tab => app.model.ui.active_tab = app.model.ui.active_tab.next(),
        KeyCode::BackTab => app.model.ui.active_tab = app.model.ui.active_tab.prev(),
        KeyCode::F(5) => app.refresh_entries(),
        KeyCode::Esc if !app.model.ui.search_query.is_empty() => app.clear_search(),
        _ => match app.model.ui.active_tab {
            Tab::Files => handle_files_key(app, key),
            Tab::Templates => handle_templates_key(app, key),
            Tab::Help => {}
        },
    }

    Ok(())
}

fn handle_files_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down => app.model.files.select_next(),
        KeyCode::Up => app.model.files.select_previous(),
        KeyCode::Home => app.model.files.select_first(),
        KeyCode::End => app.model.files.select_last(),
        KeyCode::PageDown => app.model.files.page_down(PAGE_JUMP),
        KeyCode::PageUp => app.model.files.page_up(PAGE_JUMP),
        KeyCode::Delete => app.delete_selected(),
        _ => {}
    }
}

fn handle_templates_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down => app.select_next_template(),
        KeyCode::Up => app.select_previous_template(),
        KeyCode::Char('n') => app.model.ui.open_prompt(InputPurpose::NewTemplate),
        KeyCode::Char('r') => {
            let current = app.model.templates.active_template().name.clone();
            app.model
                .ui
                .open_prompt_with(InputPurpose::TemplateName, current);
        }
        KeyCode::Char('p') => {
            let current = app.model.templates.active_template().prefix.clone();
            app.model
                .ui
                .open_prompt_with(InputPurpose::EditPrefix, current);
        }
        KeyCode::Char('s') => {
            let current = app.model.templates.active_template().suffix.clone();
            app.model
                .ui
                .open_prompt_with(InputPurpose::EditSuffix, current);
        }
        KeyCode::Char('b') => {
            let current = app
                .model
                .templates
                .active_template()
                .body
                .clone()
                .unwrap_or_default();
            app.model
                .ui
                .open_prompt_with(InputPurpose::EditBody, current);
        }
        KeyCode::Char('d') | KeyCode::Delete => app.delete_active_template(),
        _ => {}
    }
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.model.ui.input_prompt = None,
        KeyCode::Enter => {
            if let Some(prompt) = app.model.ui.input_prompt.take() {
                complete_prompt(app, prompt.purpose, prompt.buffer);
            }
        }
        KeyCode::Backspace => {
            if let Some(prompt) = &mut app.model.ui.input_prompt {
                prompt.buffer.pop();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(prompt) = &mut app.model.ui.input_prompt {
                prompt.buffer.push(c);
            }
        }
        _ => {}
    }
}

fn complete_prompt(app: &mut App, purpose: InputPurpose, buffer: String) {
    match purpose {
        InputPurpose::AddFiles => app.add_files(&buffer),
        InputPurpose::AddFolder => app.add_folder(&buffer),
        InputPurpose::TemplateName => app.rename_active_template(buffer),
        InputPurpose::NewTemplate => app.new_template(buffer),
        InputPurpose::EditPrefix => app.set_active_prefix(buffer),
        InputPurpose::EditSuffix => app.set_active_suffix(buffer),
        InputPurpose::EditBody => app.set_active_body(buffer),
    }
}
