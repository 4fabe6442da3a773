//! Searchable multi-select over the vocabulary.
//!
//! [`SelectorController`] owns the vocabulary, the selection and the live search term, and is the
//! only place the selection is mutated. Every mutation goes through a vocabulary lookup, so the
//! selection is always a subset of the vocabulary.

use crate::selection::Selection;
use crate::vocabulary::Vocabulary;

/// One row of the filtered dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownEntry {
    pub symptom: String,
    /// Whether the symptom is currently selected.
    pub active: bool,
}

/// Result of a keyboard commit in the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The term matched an unselected symptom, which is now selected.
    Added,
    /// The term matched a symptom that was already selected.
    AlreadySelected,
    /// Nothing matched; no state changed.
    NoMatch,
}

#[derive(Debug, Clone, Default)]
pub struct SelectorController {
    vocabulary: Vocabulary,
    selection: Selection,
    search_term: String,
}

impl SelectorController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replaces the vocabulary wholesale.
    ///
    /// Selected symptoms that are not part of the new vocabulary are dropped.
    pub fn set_vocabulary(&mut self, vocabulary: Vocabulary) {
        let stale: Vec<String> = self
            .selection
            .iter()
            .filter(|s| !vocabulary.contains(s))
            .map(str::to_string)
            .collect();
        for symptom in &stale {
            tracing::debug!("dropping selected symptom missing from new vocabulary: {symptom}");
            self.selection.remove(symptom);
        }
        self.vocabulary = vocabulary;
    }

    /// Stores the live search term. Matching against it is case-insensitive.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    fn clear_search_term(&mut self) {
        self.search_term.clear();
    }

    /// Vocabulary entries matching the search term, in vocabulary order, with active markers.
    pub fn dropdown(&self) -> Vec<DropdownEntry> {
        self.vocabulary
            .filter(&self.search_term)
            .map(|symptom| DropdownEntry {
                symptom: symptom.to_string(),
                active: self.selection.contains(symptom),
            })
            .collect()
    }

    /// Selects `symptom` if unselected, deselects it otherwise.
    ///
    /// Returns `false` without changing anything when `symptom` is not in the vocabulary.
    pub fn toggle(&mut self, symptom: &str) -> bool {
        if !self.vocabulary.contains(symptom) {
            tracing::warn!("ignoring toggle of unknown symptom: {symptom}");
            return false;
        }
        if !self.selection.remove(symptom) {
            self.selection.insert(symptom);
        }
        true
    }

    /// Selects the vocabulary entry equal to `term` ignoring case.
    ///
    /// On a match the search term is cleared, whether or not the symptom was already selected.
    /// Without a match nothing changes.
    pub fn commit_exact_match(&mut self, term: &str) -> CommitOutcome {
        let Some(symptom) = self.vocabulary.find_exact(term).map(str::to_string) else {
            return CommitOutcome::NoMatch;
        };

        self.clear_search_term();
        if self.selection.insert(&symptom) {
            CommitOutcome::Added
        } else {
            CommitOutcome::AlreadySelected
        }
    }

    /// Deselects `symptom`. Returns `false` if it was not selected.
    pub fn remove(&mut self, symptom: &str) -> bool {
        self.selection.remove(symptom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(terms: &[&str]) -> SelectorController {
        let mut c = SelectorController::new();
        c.set_vocabulary(terms.iter().map(|s| s.to_string()).collect());
        c
    }

    fn subset_of_vocabulary(c: &SelectorController) -> bool {
        c.selection().iter().all(|s| c.vocabulary().contains(s))
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut c = controller(&["Cough", "Fever"]);
        assert!(!c.selection().contains("Fever"));
        c.toggle("Fever");
        assert!(c.selection().contains("Fever"));
        c.toggle("Fever");
        assert!(!c.selection().contains("Fever"));
    }

    #[test]
    fn toggle_unknown_symptom_is_noop() {
        let mut c = controller(&["Cough", "Fever"]);
        assert!(!c.toggle("Sneezing"));
        assert!(c.selection().is_empty());
    }

    #[test]
    fn commit_exact_match_adds_and_clears_search() {
        let mut c = controller(&["Fever", "Cough"]);
        c.set_search_term("fever");
        assert_eq!(c.commit_exact_match("fever"), CommitOutcome::Added);
        assert_eq!(c.selection().to_vec(), vec!["Fever".to_string()]);
        assert_eq!(c.search_term(), "");
    }

    #[test]
    fn commit_exact_match_on_selected_still_clears_search() {
        let mut c = controller(&["Fever", "Cough"]);
        c.toggle("Fever");
        c.set_search_term("FEVER");
        assert_eq!(c.commit_exact_match("FEVER"), CommitOutcome::AlreadySelected);
        assert_eq!(c.selection().len(), 1);
        assert_eq!(c.search_term(), "");
    }

    #[test]
    fn commit_without_match_changes_nothing() {
        let mut c = controller(&["Fever", "Cough"]);
        c.set_search_term("xyz");
        assert_eq!(c.commit_exact_match("xyz"), CommitOutcome::NoMatch);
        assert!(c.selection().is_empty());
        assert_eq!(c.search_term(), "xyz");
    }

    #[test]
    fn commit_partial_term_is_not_a_match() {
        let mut c = controller(&["Fever"]);
        c.set_search_term("fev");
        assert_eq!(c.commit_exact_match("fev"), CommitOutcome::NoMatch);
        assert_eq!(c.search_term(), "fev");
    }

    #[test]
    fn dropdown_marks_active_entries_in_vocabulary_order() {
        let mut c = controller(&["High fever", "Fever", "Cough"]);
        c.toggle("High fever");
        c.set_search_term("FeVeR");
        assert_eq!(
            c.dropdown(),
            vec![
                DropdownEntry {
                    symptom: "Fever".into(),
                    active: false
                },
                DropdownEntry {
                    symptom: "High fever".into(),
                    active: true
                },
            ]
        );
    }

    #[test]
    fn dropdown_is_same_for_any_case_of_term() {
        let mut c = controller(&["Fever", "Mild fever", "Cough"]);
        c.set_search_term("FEVER");
        let upper = c.dropdown();
        c.set_search_term("fever");
        assert_eq!(upper, c.dropdown());
    }

    #[test]
    fn remove_updates_dropdown_markers() {
        let mut c = controller(&["Cough", "Fever"]);
        c.toggle("Fever");
        assert!(c.remove("Fever"));
        assert!(c.dropdown().iter().all(|e| !e.active));
        assert!(!c.remove("Fever"));
    }

    #[test]
    fn reload_drops_selection_outside_new_vocabulary() {
        let mut c = controller(&["Cough", "Fever"]);
        c.toggle("Fever");
        c.toggle("Cough");
        c.set_vocabulary(["Cough".to_string()].into_iter().collect());
        assert_eq!(c.selection().to_vec(), vec!["Cough".to_string()]);
        assert!(subset_of_vocabulary(&c));
    }

    #[test]
    fn selection_stays_within_vocabulary_across_operations() {
        let mut c = controller(&["Cough", "Fever", "Headache"]);
        c.toggle("Fever");
        c.toggle("Unknown");
        c.commit_exact_match("headache");
        c.commit_exact_match("nothing");
        c.remove("Cough");
        c.toggle("Fever");
        c.toggle("Cough");
        assert!(subset_of_vocabulary(&c));
        assert_eq!(
            c.selection().to_vec(),
            vec!["Headache".to_string(), "Cough".to_string()]
        );
    }
}
