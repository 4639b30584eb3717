//! HTTP transport shared by every registry operation
//!
//! Builds request URLs, attaches the bearer token on authenticated routes,
//! serializes JSON bodies and maps every failure into [`ClawPrintError`].
//! Each call is a single round trip; nothing is retried or cached.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, Method};
use serde_json::Value;
use tracing::{debug, trace};

use clawprint_config::ClientConfig;
use clawprint_core::error::{ClawPrintError, TransportKind};

use crate::RegistryResult;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("clawprint-rust/", env!("CARGO_PKG_VERSION"));

/// Query parameters; `None` values are dropped before sending
pub type QueryParams<'a> = [(&'a str, Option<String>)];

/// Authentication requirement of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Public route, no header sent
    Public,
    /// Bearer token required; carries the calling operation's name
    Required(&'static str),
}

/// Transport helper holding the resolved configuration
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Underlying HTTP client
    client: Client,
    /// Resolved key, base URL and timeout
    config: ClientConfig,
}

impl HttpClient {
    /// Create a transport for the given configuration
    pub fn new(config: ClientConfig) -> RegistryResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = ClientBuilder::new()
            .timeout(config.timeout())
            .gzip(true)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ClawPrintError::transport(
                    TransportKind::Request,
                    format!("Failed to create HTTP client: {}", e),
                    e,
                )
            })?;

        Ok(Self { client, config })
    }

    /// The configuration this transport was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for a path under the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Return the API key, or fail naming the operation that needed it
    pub fn ensure_auth(&self, operation: &str) -> RegistryResult<&str> {
        self.config
            .api_key()
            .ok_or_else(|| ClawPrintError::auth_required(operation))
    }

    /// Execute a request and return the parsed JSON body.
    ///
    /// A 2xx response with no parsable body yields an empty object.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams<'_>,
        body: Option<&Value>,
        auth: Auth,
    ) -> RegistryResult<Value> {
        let bearer = match auth {
            Auth::Required(operation) => Some(self.ensure_auth(operation)?),
            Auth::Public => None,
        };

        let params: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
            .collect();
        trace!(dropped = query.len() - params.len(), "dropped unset query parameters");

        debug!(%method, path, authenticated = bearer.is_some(), "sending registry request");

        let mut builder = self.client.request(method, self.url(path));
        if !params.is_empty() {
            builder = builder.query(&params);
        }
        if let Some(json) = body {
            builder = builder.json(json);
        }
        if let Some(key) = bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", key));
        }

        let response = builder.send().await.map_err(|e| self.map_transport_error(e))?;
        let status = response.status();
        debug!(status = status.as_u16(), path, "registry responded");

        let bytes = response.bytes().await.map_err(|e| self.map_transport_error(e))?;
        let parsed = parse_body(&bytes);

        if status.is_success() {
            Ok(parsed.unwrap_or_else(|| Value::Object(serde_json::Map::new())))
        } else {
            Err(ClawPrintError::from_response(status.as_u16(), parsed))
        }
    }

    /// Send a GET request
    pub async fn get(&self, path: &str, query: &QueryParams<'_>, auth: Auth) -> RegistryResult<Value> {
        self.request(Method::GET, path, query, None, auth).await
    }

    /// Send a POST request with a JSON body
    pub async fn post(&self, path: &str, body: &Value, auth: Auth) -> RegistryResult<Value> {
        self.request(Method::POST, path, &[], Some(body), auth).await
    }

    /// Send a PATCH request with a JSON body
    pub async fn patch(&self, path: &str, body: &Value, auth: Auth) -> RegistryResult<Value> {
        self.request(Method::PATCH, path, &[], Some(body), auth).await
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ClawPrintError {
        if error.is_connect() {
            let message = format!("Connection error: {}", error);
            ClawPrintError::transport(TransportKind::Connection, message, error)
        } else if error.is_timeout() {
            let message = format!(
                "Request timed out after {}s",
                self.config.timeout().as_secs_f64()
            );
            ClawPrintError::transport(TransportKind::Timeout, message, error)
        } else {
            let message = format!("Request failed: {}", error);
            ClawPrintError::transport(TransportKind::Request, message, error)
        }
    }
}

/// Parse a response body; empty, `null` or malformed bodies count as absent
fn parse_body(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Null) | Err(_) => None,
        Ok(value) => Some(value),
    }
}
