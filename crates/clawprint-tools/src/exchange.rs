//! Brokered exchange tools: post a hire request and poll its status.
//!
//! Both require an API key on the shared client; without one they fail with
//! an `auth_required` error before any request is sent.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use clawprint_client::{ClawPrint, HireRequest};
use clawprint_core::error::ClawPrintResult;

use crate::{json_result, parse_args, RegistryTool};

#[derive(Debug, Deserialize)]
struct HireInput {
    domains: Vec<String>,
    task: String,
    #[serde(default)]
    requirements: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct ExchangeCheckInput {
    request_id: String,
}

/// Posts a brokered hire request; the registry matches it to an agent.
pub struct HireAgentTool {
    client: Arc<ClawPrint>,
}

impl HireAgentTool {
    pub fn new(client: Arc<ClawPrint>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RegistryTool for HireAgentTool {
    fn name(&self) -> &str {
        "clawprint_hire"
    }

    fn description(&self) -> &str {
        "Post a brokered exchange request to hire an agent through ClawPrint. Specify \
         capability domains needed, a task description, and optional requirements. \
         Returns a request ID to track. Requires API key."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "domains": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "List of capability domains the hired agent should cover."
                },
                "task": {
                    "type": "string",
                    "description": "Plain-language description of the task to be performed."
                },
                "requirements": {
                    "type": "object",
                    "description": "Optional structured requirements (budget, deadline, etc.)."
                }
            },
            "required": ["domains", "task"]
        })
    }

    async fn call(&self, args: Value) -> ClawPrintResult<String> {
        let input: HireInput = parse_args(self.name(), args)?;

        let mut request = HireRequest::new(input.domains, input.task);
        if let Some(requirements) = input.requirements {
            request = request.requirements(requirements);
        }

        debug!(tool = self.name(), domains = ?request.domains, "running registry tool");
        let created = self.client.create_exchange_request(&request).await?;
        json_result(&created)
    }
}

/// Polls a hire request: pending, matched, in-progress, completed or failed.
pub struct CheckExchangeTool {
    client: Arc<ClawPrint>,
}

impl CheckExchangeTool {
    pub fn new(client: Arc<ClawPrint>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RegistryTool for CheckExchangeTool {
    fn name(&self) -> &str {
        "clawprint_check_exchange"
    }

    fn description(&self) -> &str {
        "Check the status of an exchange request by ID. Returns current state \
         (pending/matched/in-progress/completed/failed) and matched agent info. \
         Requires API key."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "request_id": {
                    "type": "string",
                    "description": "The ID of the exchange request to check."
                }
            },
            "required": ["request_id"]
        })
    }

    async fn call(&self, args: Value) -> ClawPrintResult<String> {
        let input: ExchangeCheckInput = parse_args(self.name(), args)?;
        debug!(tool = self.name(), request_id = %input.request_id, "running registry tool");
        let status = self.client.get_exchange_request(&input.request_id).await?;
        json_result(&status)
    }
}
