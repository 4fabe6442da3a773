//! Prediction submit state machine.
//!
//! ```text
//! Idle | Results | Error --submit--> Loading --ok(non-empty)--> Results
//!                                            --ok(empty)------> Error
//!                                            --failure--------> Error
//! ```
//!
//! A submit with nothing selected goes straight to `Error` without leaving a request behind.
//! Under [`SubmitPolicy::Exclusive`] every submit is ignored while a request is in flight, the
//! empty one included, so `Loading` is only left by a response.
//! Submitting is split in two halves, [`PredictionWorkflow::begin`] and
//! [`PredictionWorkflow::finish`], so the caller owns the network round trip and overlapping
//! submissions can be interleaved explicitly.

use crate::config::SubmitPolicy;
use crate::error::{BackendResult, ClientError, ClientResult};
use crate::prediction::PredictionCard;
use crate::selection::Selection;
use api_shared::{PredictReq, PredictRes};

/// Which regions of the page are showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiMode {
    #[default]
    Idle,
    Loading,
    Error(String),
    Results(Vec<PredictionCard>),
}

impl UiMode {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn results(&self) -> &[PredictionCard] {
        match self {
            Self::Results(cards) => cards,
            _ => &[],
        }
    }
}

/// A request that has been started and is waiting for its response.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    ticket: u64,
    request: PredictReq,
}

impl PendingSubmission {
    /// Monotonic submission number, for diagnostics.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn request(&self) -> &PredictReq {
        &self.request
    }
}

#[derive(Debug, Clone)]
pub struct PredictionWorkflow {
    policy: SubmitPolicy,
    mode: UiMode,
    next_ticket: u64,
    /// Requests started by `begin` and not yet passed to `finish`.
    in_flight: usize,
}

impl Default for PredictionWorkflow {
    fn default() -> Self {
        Self::new(SubmitPolicy::default())
    }
}

impl PredictionWorkflow {
    pub fn new(policy: SubmitPolicy) -> Self {
        Self {
            policy,
            mode: UiMode::Idle,
            next_ticket: 1,
            in_flight: 0,
        }
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Puts an error on screen outside the submit cycle (used for vocabulary load failures).
    pub fn show_error(&mut self, err: &ClientError) {
        self.mode = UiMode::Error(err.user_message().to_string());
    }

    /// Starts a submission.
    ///
    /// Returns `Ok(None)` when the submit policy refuses to start another request while one is
    /// in flight; this is checked before anything else and leaves the mode untouched.
    /// Returns `Err(ClientError::Validation)` and enters `Error` when `selection` is empty.
    /// Otherwise enters `Loading` and returns the request to send.
    pub fn begin(
        &mut self,
        selection: &Selection,
        description: &str,
    ) -> ClientResult<Option<PendingSubmission>> {
        if self.policy == SubmitPolicy::Exclusive && self.in_flight > 0 {
            tracing::debug!("submit ignored while a prediction request is in flight");
            return Ok(None);
        }

        if selection.is_empty() {
            let err = ClientError::Validation;
            self.show_error(&err);
            return Err(err);
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight += 1;
        self.mode = UiMode::Loading;
        tracing::debug!("submission #{ticket} started with {} symptoms", selection.len());

        Ok(Some(PendingSubmission {
            ticket,
            request: PredictReq {
                symptoms: selection.to_vec(),
                description: description.trim().to_string(),
            },
        }))
    }

    /// Applies the response of a submission and leaves `Loading`.
    ///
    /// Whatever arrives last decides what is on screen. Returns the number of result cards.
    pub fn finish(
        &mut self,
        pending: PendingSubmission,
        outcome: BackendResult<PredictRes>,
    ) -> ClientResult<usize> {
        let ticket = pending.ticket;
        self.in_flight = self.in_flight.saturating_sub(1);
        let result = match outcome {
            Ok(res) => {
                let predictions = res.into_predictions();
                if predictions.is_empty() {
                    Err(ClientError::EmptyResult)
                } else {
                    let cards: Vec<PredictionCard> = predictions
                        .into_iter()
                        .map(|p| PredictionCard::from_record(p, &pending.request.symptoms))
                        .collect();
                    Ok(cards)
                }
            }
            Err(e) => {
                tracing::error!("submission #{ticket} failed: {e}");
                Err(ClientError::Prediction(e))
            }
        };

        match result {
            Ok(cards) => {
                let count = cards.len();
                tracing::debug!("submission #{ticket} returned {count} predictions");
                self.mode = UiMode::Results(cards);
                Ok(count)
            }
            Err(err) => {
                self.show_error(&err);
                Err(err)
            }
        }
    }
}
