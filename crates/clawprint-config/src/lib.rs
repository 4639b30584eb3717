//! Client configuration for the ClawPrint SDK
//!
//! A [`ClientConfig`] is resolved once, at construction, from explicit values,
//! `CLAWPRINT_*` environment variables, and built-in defaults, in that order.
//! It is immutable afterwards and safe to share across tasks.

pub mod merge;

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use clawprint_core::error::ClawPrintError;
use tracing::debug;

// Re-export main types
pub use merge::{normalize_base_url, ConfigLayering, ConfigSource};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ClawPrintError>;

/// Public registry root
pub const DEFAULT_BASE_URL: &str = "https://clawprint.io";
/// Per-request timeout when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_PREFIX: &str = "CLAWPRINT_";
pub const ENV_API_KEY: &str = "CLAWPRINT_API_KEY";
pub const ENV_BASE_URL: &str = "CLAWPRINT_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "CLAWPRINT_TIMEOUT_SECS";

/// Resolved client settings
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Start a builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Resolve entirely from the process environment and defaults
    pub fn from_env() -> ConfigResult<Self> {
        Self::builder().build()
    }

    /// Bearer token for authenticated routes
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// API root without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Collects explicit settings; [`ClientConfigBuilder::build`] fills the rest
#[derive(Clone, Default)]
pub struct ClientConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    env: Option<HashMap<String, String>>,
}

impl ClientConfigBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve against this environment snapshot instead of the process environment
    pub fn env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Resolve every setting once
    pub fn build(self) -> ConfigResult<ClientConfig> {
        let layering = match self.env {
            Some(env) => ConfigLayering::new(env),
            None => ConfigLayering::from_process_env(),
        };

        let (api_key, key_source) = layering.resolve_api_key(self.api_key);
        let (base_url, url_source) = layering.resolve_base_url(self.base_url)?;
        let (timeout, timeout_source) = layering.resolve_timeout(self.timeout)?;

        debug!(
            ?key_source,
            ?url_source,
            ?timeout_source,
            %base_url,
            "resolved ClawPrint client configuration"
        );

        Ok(ClientConfig {
            api_key,
            base_url,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::builder().env(HashMap::new()).build().unwrap();
        assert_eq!(config.api_key(), None);
        assert_eq!(config.base_url(), "https://clawprint.io");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_explicit_key_beats_environment() {
        let config = ClientConfig::builder()
            .api_key("cp_live_explicit")
            .env(env(&[(ENV_API_KEY, "cp_live_env")]))
            .build()
            .unwrap();
        assert_eq!(config.api_key(), Some("cp_live_explicit"));
    }

    #[test]
    fn test_environment_key_fallback() {
        let config = ClientConfig::builder()
            .env(env(&[(ENV_API_KEY, "cp_live_env")]))
            .build()
            .unwrap();
        assert!(config.has_api_key());
        assert_eq!(config.api_key(), Some("cp_live_env"));
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::builder()
            .base_url("https://custom.api.io/")
            .env(HashMap::new())
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "https://custom.api.io");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ClientConfig::builder()
            .api_key("cp_live_secret")
            .env(HashMap::new())
            .build()
            .unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("cp_live_secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = ClientConfig::builder()
            .base_url("clawprint")
            .env(HashMap::new())
            .build()
            .unwrap_err();
        assert_eq!(err.code(), Some("config_error"));
    }
}
