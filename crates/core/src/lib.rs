//! # Symptom Core
//!
//! Client-side logic for the symptom checker form.
//!
//! This crate holds all page state and the transitions on it:
//! - Vocabulary loading from the disease catalogue
//! - Searchable multi-select of symptoms, kept consistent with the selected-symptom tokens
//! - The prediction submit workflow and its loading/error/results states
//! - HTML and plain-text rendering of every page region
//!
//! **No transport concerns**: the HTTP client lives in `symptom-api-client` and plugs in through
//! [`SymptomBackend`]. Wire shapes live in `symptom-api-shared`.

pub mod backend;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod prediction;
pub mod render;
pub mod selection;
pub mod selector;
pub mod view;
pub mod vocabulary;
pub mod workflow;

pub use api_shared as wire;

pub use backend::SymptomBackend;
pub use config::{ClientConfig, SubmitPolicy};
pub use controller::{SymptomChecker, UiEvent};
pub use error::{BackendError, BackendResult, ClientError, ClientResult, ConfigError, ConfigResult};
pub use prediction::{PredictionCard, SymptomMark};
pub use render::HtmlPage;
pub use selection::Selection;
pub use selector::{CommitOutcome, DropdownEntry, SelectorController};
pub use view::{RegionState, View};
pub use vocabulary::Vocabulary;
pub use workflow::{PendingSubmission, PredictionWorkflow, UiMode};
