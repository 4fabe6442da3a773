//! The symptom checker controller.
//!
//! [`SymptomChecker`] owns all page state (vocabulary, selection, search term, description,
//! submit state) and pushes every change to a [`View`]. UI events come in through
//! [`SymptomChecker::dispatch`], which is the single routing table from page events to state
//! transitions.

use crate::backend::SymptomBackend;
use crate::config::ClientConfig;
use crate::error::{BackendResult, ClientError, ClientResult};
use crate::selector::{CommitOutcome, SelectorController};
use crate::view::View;
use crate::vocabulary::Vocabulary;
use crate::workflow::{PendingSubmission, PredictionWorkflow, UiMode};
use api_shared::PredictRes;

/// Events raised by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The search input changed.
    SearchInput(String),
    /// Enter was pressed in the search input.
    SearchCommit(String),
    /// A dropdown entry was clicked.
    DropdownClick(String),
    /// The remove button of a selected-symptom token was clicked.
    TokenRemove(String),
    /// The free-text description changed.
    DescriptionInput(String),
    /// The form was submitted.
    Submit,
}

pub struct SymptomChecker<B, V> {
    backend: B,
    view: V,
    selector: SelectorController,
    workflow: PredictionWorkflow,
    description: String,
}

impl<B: SymptomBackend, V: View> SymptomChecker<B, V> {
    pub fn new(backend: B, view: V, config: &ClientConfig) -> Self {
        Self {
            backend,
            view,
            selector: SelectorController::new(),
            workflow: PredictionWorkflow::new(config.submit_policy()),
            description: String::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn selector(&self) -> &SelectorController {
        &self.selector
    }

    pub fn mode(&self) -> &UiMode {
        self.workflow.mode()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Fetches the disease catalogue and rebuilds the vocabulary from it.
    ///
    /// On failure the vocabulary is left empty and the load error is shown. Returns the number of
    /// vocabulary entries.
    pub async fn load_vocabulary(&mut self) -> ClientResult<usize> {
        let result = match self.backend.fetch_diseases().await {
            Ok(res) => Ok(Vocabulary::from_diseases(&res.diseases)),
            Err(e) => {
                tracing::error!("error loading symptoms: {e}");
                Err(ClientError::Load(e))
            }
        };

        match result {
            Ok(vocabulary) => {
                let count = vocabulary.len();
                tracing::info!("loaded {count} symptoms");
                self.selector.set_vocabulary(vocabulary);
                self.render_selection();
                Ok(count)
            }
            Err(err) => {
                self.selector.set_vocabulary(Vocabulary::default());
                self.render_selection();
                self.workflow.show_error(&err);
                self.render_mode();
                Err(err)
            }
        }
    }

    /// Routes one page event to the matching state transition.
    pub async fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::SearchInput(term) => self.set_search_term(term),
            UiEvent::SearchCommit(term) => {
                self.commit_exact_match(&term);
            }
            UiEvent::DropdownClick(symptom) => self.toggle(&symptom),
            UiEvent::TokenRemove(symptom) => self.remove(&symptom),
            UiEvent::DescriptionInput(text) => self.set_description(text),
            UiEvent::Submit => {
                // Failures are already on screen.
                let _ = self.submit().await;
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.selector.set_search_term(term);
        self.view.set_search_text(self.selector.search_term());
        self.render_dropdown();
    }

    pub fn toggle(&mut self, symptom: &str) {
        if self.selector.toggle(symptom) {
            self.render_selection();
        }
    }

    /// Keyboard commit in the search box. Without an exact match nothing happens.
    pub fn commit_exact_match(&mut self, term: &str) -> CommitOutcome {
        let outcome = self.selector.commit_exact_match(term);
        if outcome != CommitOutcome::NoMatch {
            self.view.set_search_text("");
            self.render_selection();
        }
        outcome
    }

    pub fn remove(&mut self, symptom: &str) {
        if self.selector.remove(symptom) {
            self.render_selection();
        }
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    /// First half of a submit: validates, enters `Loading` and returns the request to send.
    ///
    /// Returns `Ok(None)` when the submit policy ignores this submit.
    pub fn begin_submit(&mut self) -> ClientResult<Option<PendingSubmission>> {
        let pending = self
            .workflow
            .begin(self.selector.selection(), &self.description);
        self.render_mode();
        pending
    }

    /// Second half of a submit: applies the service's answer and leaves `Loading`.
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        outcome: BackendResult<PredictRes>,
    ) -> ClientResult<usize> {
        let result = self.workflow.finish(pending, outcome);
        self.render_mode();
        result
    }

    /// Runs a whole submit round trip.
    ///
    /// Returns the number of result cards, or `None` if the submit was ignored.
    pub async fn submit(&mut self) -> ClientResult<Option<usize>> {
        let Some(pending) = self.begin_submit()? else {
            return Ok(None);
        };
        let outcome = self.backend.predict(pending.request()).await;
        self.finish_submit(pending, outcome).map(Some)
    }

    fn render_dropdown(&mut self) {
        let entries = self.selector.dropdown();
        self.view.render_dropdown(&entries);
    }

    fn render_selection(&mut self) {
        self.view
            .render_selected(self.selector.selection().as_slice());
        self.render_dropdown();
    }

    fn render_mode(&mut self) {
        match self.workflow.mode() {
            UiMode::Idle => {}
            UiMode::Loading => {
                self.view.hide_error();
                self.view.clear_results();
                self.view.set_loading(true);
            }
            UiMode::Error(message) => {
                self.view.set_loading(false);
                self.view.show_error(message);
            }
            UiMode::Results(cards) => {
                self.view.set_loading(false);
                self.view.hide_error();
                self.view.render_results(cards);
            }
        }
    }
}
