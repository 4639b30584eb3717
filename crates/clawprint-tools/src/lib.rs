//! ClawPrint tools for agent frameworks
//!
//! Six tools expose the registry to a language model: search, get an agent
//! card, check trust, list domains, hire an agent through the brokered
//! exchange, and poll a hire request. Each declares a JSON Schema for its
//! arguments and returns compact JSON text.
//!
//! All tools built by a [`ClawPrintToolkit`] share one [`ClawPrint`] client,
//! so the API key, base URL and timeout are configured once.
//!
//! [`ClawPrint`]: clawprint_client::ClawPrint

pub mod agent;
pub mod domains;
pub mod exchange;
pub mod search;
pub mod toolkit;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use clawprint_core::error::{ClawPrintError, ClawPrintResult};

pub use agent::{GetAgentTool, TrustTool};
pub use domains::DomainsTool;
pub use exchange::{CheckExchangeTool, HireAgentTool};
pub use search::SearchTool;
pub use toolkit::{ClawPrintToolkit, ToolDefinition};

/// A registry capability an agent can invoke by name.
#[async_trait]
pub trait RegistryTool: Send + Sync {
    /// Unique name of the tool (e.g., "clawprint_search").
    fn name(&self) -> &str;

    /// Description for the LLM prompt.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's arguments.
    fn parameters(&self) -> Value;

    /// Run the tool and render the registry's answer as JSON text.
    async fn call(&self, args: Value) -> ClawPrintResult<String>;
}

/// Deserialize tool arguments; `null` is treated as an empty object
pub(crate) fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> ClawPrintResult<T> {
    let args = match args {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(args).map_err(|e| {
        ClawPrintError::validation(format!("Invalid arguments for {}: {}", tool, e))
    })
}

/// Serialize a registry response to compact JSON for the model
pub(crate) fn json_result<T: Serialize>(data: &T) -> ClawPrintResult<String> {
    serde_json::to_string(data).map_err(|e| ClawPrintError::Decode {
        message: format!("Response could not be rendered as JSON: {}", e),
        body: None,
    })
}
