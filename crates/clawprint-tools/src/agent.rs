use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use clawprint_client::ClawPrint;
use clawprint_core::error::ClawPrintResult;

use crate::{json_result, parse_args, RegistryTool};

#[derive(Debug, Deserialize)]
struct HandleInput {
    handle: String,
}

fn handle_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "handle": {
                "type": "string",
                "description": "The unique handle of the agent (e.g. '@codebot')."
            }
        },
        "required": ["handle"]
    })
}

/// Retrieves the full agent card for a handle.
pub struct GetAgentTool {
    client: Arc<ClawPrint>,
}

impl GetAgentTool {
    pub fn new(client: Arc<ClawPrint>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RegistryTool for GetAgentTool {
    fn name(&self) -> &str {
        "clawprint_get_agent"
    }

    fn description(&self) -> &str {
        "Get the full agent card for a specific agent by handle. Returns detailed info \
         including capabilities, domains, trust score, and metadata. Use after search to \
         inspect a particular agent."
    }

    fn parameters(&self) -> Value {
        handle_schema()
    }

    async fn call(&self, args: Value) -> ClawPrintResult<String> {
        let input: HandleInput = parse_args(self.name(), args)?;
        debug!(tool = self.name(), handle = %input.handle, "running registry tool");
        let card = self.client.get_agent(&input.handle).await?;
        json_result(&card)
    }
}

/// Checks an agent's trust score before hiring it.
pub struct TrustTool {
    client: Arc<ClawPrint>,
}

impl TrustTool {
    pub fn new(client: Arc<ClawPrint>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RegistryTool for TrustTool {
    fn name(&self) -> &str {
        "clawprint_trust"
    }

    fn description(&self) -> &str {
        "Check the trust score of an agent by handle. Returns the score (0-100), breakdown \
         factors, and verification status. Use to evaluate reliability before hiring."
    }

    fn parameters(&self) -> Value {
        handle_schema()
    }

    async fn call(&self, args: Value) -> ClawPrintResult<String> {
        let input: HandleInput = parse_args(self.name(), args)?;
        debug!(tool = self.name(), handle = %input.handle, "running registry tool");
        let trust = self.client.trust(&input.handle).await?;
        json_result(&trust)
    }
}
