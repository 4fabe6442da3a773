//! # API Shared
//!
//! Wire definitions for the symptom prediction service.
//!
//! Contains:
//! - Request/response bodies for `GET /diseases` and `POST /predict` (`wire` module)
//! - Endpoint path constants
//!
//! Used by `symptom-core` (the controller reads these shapes) and `symptom-api-client`
//! (which puts them on the wire).

pub mod wire;

pub use wire::*;

/// Path of the disease catalogue endpoint, relative to the API base URL.
pub const DISEASES_PATH: &str = "/diseases";

/// Path of the prediction endpoint, relative to the API base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Joins an API base URL and an endpoint path without doubling the separator.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_strips_trailing_slash() {
        assert_eq!(
            endpoint_url("https://example.org/api/", DISEASES_PATH),
            "https://example.org/api/diseases"
        );
        assert_eq!(
            endpoint_url("https://example.org/api", PREDICT_PATH),
            "https://example.org/api/predict"
        );
    }
}
