// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (tab bar, main pane, search, status)
// - render: Main orchestration function that coordinates all rendering
// - tabs: Renders the tab bar
// - file_list: Renders the rename table (original -> preview)
// - template_view: Renders the template list and the active template's fields
// - help: Renders the hotkey reference tab
// - search: Renders search input box with query and match count
// - status_bar: Renders bottom status bar with counts and last error kind
// - dialogs: Renders the input prompt and the apply confirmation
// - toast: Renders toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod file_list;
pub mod help;
pub mod layout;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod tabs;
pub mod template_view;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
