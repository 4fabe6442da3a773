use crate::constants::{
    EMPTY_RESULT_MESSAGE, LOAD_FAILED_MESSAGE, NO_SYMPTOMS_MESSAGE, PREDICTION_FAILED_MESSAGE,
};

/// Failures talking to the prediction service.
///
/// These carry the diagnostic detail that is logged for developers. They are never shown to the
/// user verbatim; the controller wraps them in a [`ClientError`] first.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("service responded with status {status}")]
    Status { status: u16 },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Errors surfaced by the symptom checker controller.
///
/// Every variant maps to exactly one user-facing message (see [`ClientError::user_message`]).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to load symptom vocabulary")]
    Load(#[source] BackendError),
    #[error("no symptoms selected")]
    Validation,
    #[error("prediction service returned no matches")]
    EmptyResult,
    #[error("prediction request failed")]
    Prediction(#[source] BackendError),
}

impl ClientError {
    /// The message shown in the error region for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Load(_) => LOAD_FAILED_MESSAGE,
            Self::Validation => NO_SYMPTOMS_MESSAGE,
            Self::EmptyResult => EMPTY_RESULT_MESSAGE,
            Self::Prediction(_) => PREDICTION_FAILED_MESSAGE,
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors raised while resolving [`crate::config::ClientConfig`] at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
