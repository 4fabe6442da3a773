//! Client runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the controller and the
//! HTTP client. Nothing in this crate reads environment variables; the binaries read them and
//! hand the raw values to the parsing helpers below.

use crate::constants::DEFAULT_API_BASE_URL;
use crate::error::{ConfigError, ConfigResult};
use std::str::FromStr;
use std::time::Duration;

/// How the prediction workflow treats a submit that arrives while a request is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Accept every submit. Responses are applied in arrival order, so the last one to arrive
    /// wins.
    #[default]
    Overlap,
    /// Ignore submits while a request is in flight.
    Exclusive,
}

impl FromStr for SubmitPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overlap" => Ok(Self::Overlap),
            "exclusive" => Ok(Self::Exclusive),
            other => Err(ConfigError::InvalidInput(format!(
                "unknown submit policy '{other}' (expected 'overlap' or 'exclusive')"
            ))),
        }
    }
}

/// Client configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_base_url: String,
    submit_policy: SubmitPolicy,
    request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a new `ClientConfig`.
    ///
    /// The base URL is stored without a trailing slash and must not be blank.
    pub fn new(
        api_base_url: impl Into<String>,
        submit_policy: SubmitPolicy,
        request_timeout: Option<Duration>,
    ) -> ConfigResult<Self> {
        let api_base_url = api_base_url.into().trim().trim_end_matches('/').to_string();
        if api_base_url.is_empty() {
            return Err(ConfigError::InvalidInput(
                "api_base_url cannot be empty".into(),
            ));
        }

        Ok(Self {
            api_base_url,
            submit_policy,
            request_timeout,
        })
    }

    /// Resolve a `ClientConfig` from raw (possibly missing) environment values.
    ///
    /// # Arguments
    ///
    /// * `api_base_url` - value of `SYMPTOM_API_BASE_URL`
    /// * `submit_policy` - value of `SYMPTOM_SUBMIT_POLICY`
    /// * `request_timeout_secs` - value of `SYMPTOM_REQUEST_TIMEOUT_SECS`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidInput` if the policy or timeout cannot be parsed.
    pub fn from_env_values(
        api_base_url: Option<String>,
        submit_policy: Option<String>,
        request_timeout_secs: Option<String>,
    ) -> ConfigResult<Self> {
        Self::new(
            api_base_url_from_env_value(api_base_url),
            submit_policy_from_env_value(submit_policy)?,
            request_timeout_from_env_value(request_timeout_secs)?,
        )
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn submit_policy(&self) -> SubmitPolicy {
        self.submit_policy
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            submit_policy: SubmitPolicy::default(),
            request_timeout: None,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the API base URL from an optional raw value, falling back to the public service.
pub fn api_base_url_from_env_value(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Parse the submit policy from an optional raw value.
///
/// If `value` is `None` or blank, returns [`SubmitPolicy::Overlap`].
pub fn submit_policy_from_env_value(value: Option<String>) -> ConfigResult<SubmitPolicy> {
    let parsed = non_blank(value)
        .map(|v| v.parse::<SubmitPolicy>())
        .transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Parse a request timeout given in whole seconds.
///
/// `None`, blank and `0` all mean "no timeout".
pub fn request_timeout_from_env_value(value: Option<String>) -> ConfigResult<Option<Duration>> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };

    let secs = raw.parse::<u64>().map_err(|e| {
        ConfigError::InvalidInput(format!("request timeout '{raw}' is not a number: {e}"))
    })?;

    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let cfg = ClientConfig::new("http://localhost:8000/", SubmitPolicy::Overlap, None).unwrap();
        assert_eq!(cfg.api_base_url(), "http://localhost:8000");
    }

    #[test]
    fn new_rejects_blank_base_url() {
        let err = ClientConfig::new("  ", SubmitPolicy::Overlap, None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInput(_)));
    }

    #[test]
    fn default_points_at_public_service() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(cfg.submit_policy(), SubmitPolicy::Overlap);
        assert_eq!(cfg.request_timeout(), None);
    }

    #[test]
    fn from_env_values_combines_all_settings() {
        let cfg = ClientConfig::from_env_values(
            Some("http://127.0.0.1:8000/api/".into()),
            Some("exclusive".into()),
            Some("15".into()),
        )
        .unwrap();
        assert_eq!(cfg.api_base_url(), "http://127.0.0.1:8000/api");
        assert_eq!(cfg.submit_policy(), SubmitPolicy::Exclusive);
        assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(15)));

        let defaults = ClientConfig::from_env_values(None, None, None).unwrap();
        assert_eq!(defaults.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn base_url_falls_back_when_blank() {
        assert_eq!(api_base_url_from_env_value(None), DEFAULT_API_BASE_URL);
        assert_eq!(
            api_base_url_from_env_value(Some(" ".into())),
            DEFAULT_API_BASE_URL
        );
        assert_eq!(
            api_base_url_from_env_value(Some("http://127.0.0.1:8000".into())),
            "http://127.0.0.1:8000"
        );
    }

    #[test]
    fn submit_policy_parses_case_insensitively() {
        assert_eq!(
            submit_policy_from_env_value(Some("Exclusive".into())).unwrap(),
            SubmitPolicy::Exclusive
        );
        assert_eq!(
            submit_policy_from_env_value(None).unwrap(),
            SubmitPolicy::Overlap
        );
        assert!(submit_policy_from_env_value(Some("sometimes".into())).is_err());
    }

    #[test]
    fn request_timeout_zero_means_none() {
        assert_eq!(request_timeout_from_env_value(Some("0".into())).unwrap(), None);
        assert_eq!(
            request_timeout_from_env_value(Some("30".into())).unwrap(),
            Some(Duration::from_secs(30))
        );
        assert!(request_timeout_from_env_value(Some("soon".into())).is_err());
    }
}
