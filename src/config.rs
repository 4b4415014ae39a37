//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Backend API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the accounting backend, without a trailing slash.
    pub base_url: String,
    /// Bearer token forwarded on every request, if the backend requires one.
    pub bearer_token: Option<SecretString>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            bearer_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Read configuration from the environment.
    ///
    /// `ENDLESS_API_BASE` overrides the base URL, `ENDLESS_API_TOKEN` sets the
    /// bearer token, and `ENDLESS_API_TIMEOUT_SECS` the request timeout.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(base) = std::env::var("ENDLESS_API_BASE") {
            config.base_url = base.trim_end_matches('/').to_string();
        }

        if let Ok(token) = std::env::var("ENDLESS_API_TOKEN") {
            if !token.is_empty() {
                config.bearer_token = Some(SecretString::from(token));
            }
        }

        if let Ok(raw) = std::env::var("ENDLESS_API_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "ENDLESS_API_TIMEOUT_SECS".to_string(),
                message: format!("expected an integer number of seconds, got {raw:?}"),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
