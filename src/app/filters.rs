//! Search filter methods

use crate::logic;
use crate::App;

impl App {
    /// Recompute the visible subset from the current search query and
    /// keep the selection inside it.
    pub(crate) fn apply_search_filter(&mut self) {
        self.model.files.visible =
            logic::search::visible_indices(&self.model.files.entries, &self.model.ui.search_query);
        self.model.files.clamp_selection();
    }

    /// Leave search mode and drop the query.
    pub(crate) fn clear_search(&mut self) {
        self.model.ui.search_mode = false;
        self.model.ui.search_query.clear();
        self.apply_search_filter();
    }
}
