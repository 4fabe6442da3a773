//! Constants used throughout the symptom checker core crate.
//!
//! User-facing messages live here so the controller, the views and the tests all agree on the
//! exact wording.

/// Backend used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://healthdetective.site/api";

/// Shown when the symptom vocabulary could not be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load symptoms. Please try again later.";

/// Shown when the user submits without selecting anything.
pub const NO_SYMPTOMS_MESSAGE: &str = "Please select at least one symptom";

/// Shown when the prediction service found nothing.
pub const EMPTY_RESULT_MESSAGE: &str = "No matching diseases found. Please try different symptoms.";

/// Shown when the prediction request failed for any reason.
pub const PREDICTION_FAILED_MESSAGE: &str = "Failed to analyze symptoms. Please try again later.";

/// Environment variable holding the backend base URL.
pub const API_BASE_URL_ENV: &str = "SYMPTOM_API_BASE_URL";

/// Environment variable selecting the submit policy (`overlap` or `exclusive`).
pub const SUBMIT_POLICY_ENV: &str = "SYMPTOM_SUBMIT_POLICY";

/// Environment variable holding the request timeout in seconds.
pub const REQUEST_TIMEOUT_ENV: &str = "SYMPTOM_REQUEST_TIMEOUT_SECS";
