//! Render sink for the page regions the controller drives.
//!
//! Each method corresponds to one region of the symptom checker page. Regions are shown and
//! hidden, never created or destroyed, so an implementation only needs to hold the latest
//! content of each one.

use crate::prediction::PredictionCard;
use crate::selector::DropdownEntry;

pub trait View {
    /// Replace the dropdown with the filtered entries.
    fn render_dropdown(&mut self, entries: &[DropdownEntry]);

    /// Replace the selected-symptom tokens.
    fn render_selected(&mut self, symptoms: &[String]);

    /// Set the text of the search input.
    fn set_search_text(&mut self, text: &str);

    fn set_loading(&mut self, visible: bool);

    /// Show `message` in the error region. Also empties the results region.
    fn show_error(&mut self, message: &str);

    fn hide_error(&mut self);

    fn render_results(&mut self, cards: &[PredictionCard]);

    fn clear_results(&mut self);
}

/// Snapshot-style view that records the current state of every region.
///
/// Handy for tests and for callers that want to inspect the page without any markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionState {
    pub dropdown: Vec<DropdownEntry>,
    pub selected: Vec<String>,
    pub search_text: String,
    pub loading: bool,
    pub error: Option<String>,
    pub results: Vec<PredictionCard>,
}

impl View for RegionState {
    fn render_dropdown(&mut self, entries: &[DropdownEntry]) {
        self.dropdown = entries.to_vec();
    }

    fn render_selected(&mut self, symptoms: &[String]) {
        self.selected = symptoms.to_vec();
    }

    fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.results.clear();
    }

    fn hide_error(&mut self) {
        self.error = None;
    }

    fn render_results(&mut self, cards: &[PredictionCard]) {
        self.results = cards.to_vec();
    }

    fn clear_results(&mut self) {
        self.results.clear();
    }
}
