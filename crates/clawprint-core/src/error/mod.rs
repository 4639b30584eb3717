//! Error types and result aliases for ClawPrint operations.
//!
//! Every failure surfaced by the SDK is a [`ClawPrintError`]. Callers can match
//! on the variant, or branch on the machine-readable [`ClawPrintError::code`]
//! and [`ClawPrintError::status`] without parsing messages.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Fallback message when a failing response carries no usable text
pub const GENERIC_API_FAILURE: &str = "API request failed";

/// Transport-level failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// The connection could not be established
    Connection,
    /// The configured timeout elapsed
    Timeout,
    /// Any other send-level fault
    Request,
}

impl TransportKind {
    /// Machine-readable code for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Connection => "connection_error",
            TransportKind::Timeout => "timeout",
            TransportKind::Request => "request_error",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for all ClawPrint operations
#[derive(Error, Debug)]
pub enum ClawPrintError {
    /// Caller input violated a precondition; no request was sent
    #[error("(validation_error) {message}")]
    Validation { message: String },

    /// An authenticated operation was invoked without an API key
    #[error(
        "(auth_required) API key required for {operation}(). \
         Pass an api_key to the client or set the CLAWPRINT_API_KEY env var."
    )]
    AuthRequired { operation: String },

    /// The request never produced a response
    #[error("({kind}) {message}")]
    Transport {
        kind: TransportKind,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The registry answered with a non-2xx status
    #[error("[{status}] {}{message}", code_prefix(.code))]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        body: Option<Value>,
    },

    /// A 2xx body did not fit the endpoint's declared shape
    #[error("(decode_error) {message}")]
    Decode { message: String, body: Option<Value> },

    /// Client configuration could not be resolved
    #[error("(config_error) Configuration field '{field}' is invalid: {reason}")]
    InvalidConfig { field: String, reason: String },
}

fn code_prefix(code: &Option<String>) -> String {
    match code {
        Some(code) if !code.is_empty() => format!("({}) ", code),
        _ => String::new(),
    }
}

/// Result type alias for ClawPrint operations
pub type ClawPrintResult<T> = Result<T, ClawPrintError>;

impl ClawPrintError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an authentication-required error naming the calling operation
    pub fn auth_required(operation: impl Into<String>) -> Self {
        Self::AuthRequired {
            operation: operation.into(),
        }
    }

    /// Create a transport error from any error type
    pub fn transport<E>(kind: TransportKind, message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            kind,
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Build an API error from a failing response's status and parsed body.
    ///
    /// The message comes from the body's `error`, `message` or `detail` field,
    /// in that order, and the code from its `code` field.
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        let fields = body.as_ref().and_then(Value::as_object);

        let message = fields
            .and_then(|map| {
                ["error", "message", "detail"]
                    .iter()
                    .find_map(|key| map.get(*key).filter(|v| !v.is_null()))
            })
            .map(|value| match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| GENERIC_API_FAILURE.to_string());

        let code = fields
            .and_then(|map| map.get("code"))
            .and_then(|value| match value {
                Value::Null => None,
                Value::String(text) => Some(text.clone()),
                other => Some(other.to_string()),
            });

        Self::Api {
            status,
            code,
            message,
            body,
        }
    }

    /// HTTP status of the failing response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ClawPrintError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> Option<&str> {
        match self {
            ClawPrintError::Validation { .. } => Some("validation_error"),
            ClawPrintError::AuthRequired { .. } => Some("auth_required"),
            ClawPrintError::Transport { kind, .. } => Some(kind.as_str()),
            ClawPrintError::Api { code, .. } => code.as_deref(),
            ClawPrintError::Decode { .. } => Some("decode_error"),
            ClawPrintError::InvalidConfig { .. } => Some("config_error"),
        }
    }

    /// Human-readable message without the status/code decoration
    pub fn message(&self) -> String {
        match self {
            ClawPrintError::Validation { message }
            | ClawPrintError::Transport { message, .. }
            | ClawPrintError::Api { message, .. }
            | ClawPrintError::Decode { message, .. } => message.clone(),
            ClawPrintError::AuthRequired { operation } => format!(
                "API key required for {}(). Pass an api_key to the client or set the CLAWPRINT_API_KEY env var.",
                operation
            ),
            ClawPrintError::InvalidConfig { field, reason } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    /// Parsed response body, when the registry sent one
    pub fn body(&self) -> Option<&Value> {
        match self {
            ClawPrintError::Api { body, .. } | ClawPrintError::Decode { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Check if this error was raised before any network activity
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClawPrintError::Validation { .. }
                | ClawPrintError::AuthRequired { .. }
                | ClawPrintError::InvalidConfig { .. }
        )
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ClawPrintError::AuthRequired { .. } => {
                Some("Register an agent to obtain an API key, then pass it to the client")
            },
            ClawPrintError::Transport { kind: TransportKind::Timeout, .. } => {
                Some("Increase the client timeout or try again later")
            },
            ClawPrintError::Transport { .. } => Some("Check your internet connection and the base URL"),
            ClawPrintError::Api { status: 401 | 403, .. } => Some("Check that your API key is valid"),
            ClawPrintError::Api { status: 404, .. } => Some("Check the agent handle or request id"),
            _ => None,
        }
    }
}
