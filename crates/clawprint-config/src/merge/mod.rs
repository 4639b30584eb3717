//! Configuration layering: explicit values, then environment, then defaults

use std::collections::HashMap;
use std::time::Duration;

use clawprint_core::error::ClawPrintError;
use url::Url;

use crate::{ConfigResult, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_API_KEY, ENV_BASE_URL, ENV_PREFIX, ENV_TIMEOUT_SECS};

/// Where a resolved setting came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Passed to the builder
    Explicit,
    /// Environment variable
    Environment(String),
    /// Built-in default
    Default,
}

/// Resolves each setting once against a snapshot of the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigLayering {
    /// Environment overrides (`CLAWPRINT_*` variables only)
    env_overrides: HashMap<String, String>,
}

impl ConfigLayering {
    /// Layer over an explicit environment snapshot
    pub fn new(env_overrides: HashMap<String, String>) -> Self {
        Self { env_overrides }
    }

    /// Layer over the current process environment
    pub fn from_process_env() -> Self {
        Self::new(Self::collect_env_overrides())
    }

    /// Collect environment variable overrides
    pub fn collect_env_overrides() -> HashMap<String, String> {
        std::env::vars()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect()
    }

    fn env(&self, key: &str) -> Option<&str> {
        self.env_overrides
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Explicit key, else `CLAWPRINT_API_KEY`, else none. Blank values count as absent.
    pub fn resolve_api_key(&self, explicit: Option<String>) -> (Option<String>, ConfigSource) {
        if let Some(key) = explicit.filter(|k| !k.trim().is_empty()) {
            return (Some(key), ConfigSource::Explicit);
        }
        match self.env(ENV_API_KEY) {
            Some(key) => (Some(key.to_string()), ConfigSource::Environment(ENV_API_KEY.to_string())),
            None => (None, ConfigSource::Default),
        }
    }

    /// Explicit URL, else `CLAWPRINT_BASE_URL`, else the public registry; normalized
    pub fn resolve_base_url(&self, explicit: Option<String>) -> ConfigResult<(String, ConfigSource)> {
        let (raw, source) = match explicit.filter(|u| !u.trim().is_empty()) {
            Some(url) => (url, ConfigSource::Explicit),
            None => match self.env(ENV_BASE_URL) {
                Some(url) => (url.to_string(), ConfigSource::Environment(ENV_BASE_URL.to_string())),
                None => (DEFAULT_BASE_URL.to_string(), ConfigSource::Default),
            },
        };
        Ok((normalize_base_url(&raw)?, source))
    }

    /// Explicit timeout, else `CLAWPRINT_TIMEOUT_SECS`, else 30 seconds
    pub fn resolve_timeout(&self, explicit: Option<Duration>) -> ConfigResult<(Duration, ConfigSource)> {
        if let Some(timeout) = explicit {
            if timeout.is_zero() {
                return Err(ClawPrintError::InvalidConfig {
                    field: "timeout".to_string(),
                    reason: "timeout must be greater than zero".to_string(),
                });
            }
            return Ok((timeout, ConfigSource::Explicit));
        }

        match self.env(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: f64 = raw.parse().map_err(|e| ClawPrintError::InvalidConfig {
                    field: ENV_TIMEOUT_SECS.to_string(),
                    reason: format!("Invalid number '{}': {}", raw, e),
                })?;
                let timeout = Duration::try_from_secs_f64(secs)
                    .ok()
                    .filter(|t| !t.is_zero())
                    .ok_or_else(|| ClawPrintError::InvalidConfig {
                        field: ENV_TIMEOUT_SECS.to_string(),
                        reason: format!("timeout must be a positive number of seconds, got {}", raw),
                    })?;
                Ok((timeout, ConfigSource::Environment(ENV_TIMEOUT_SECS.to_string())))
            }
            None => Ok((DEFAULT_TIMEOUT, ConfigSource::Default)),
        }
    }
}

/// Validate an absolute http(s) URL and strip trailing slashes
pub fn normalize_base_url(raw: &str) -> ConfigResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    let parsed = Url::parse(trimmed).map_err(|e| ClawPrintError::InvalidConfig {
        field: "base_url".to_string(),
        reason: format!("'{}' is not a valid URL: {}", raw, e),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ClawPrintError::InvalidConfig {
            field: "base_url".to_string(),
            reason: format!("'{}' must be an http or https URL with a host", raw),
        });
    }

    Ok(trimmed.to_string())
}
