//! Bundles every ClawPrint tool around one shared client

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use clawprint_client::ClawPrint;
use clawprint_config::ClientConfig;
use clawprint_core::error::{ClawPrintError, ClawPrintResult};

use crate::{
    CheckExchangeTool, DomainsTool, GetAgentTool, HireAgentTool, RegistryTool, SearchTool, TrustTool,
};

/// Name, description and argument schema of one tool, as shown to a model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// All six ClawPrint tools wired to a single client.
///
/// Tools that need authentication (hire, check exchange) fail at call time
/// when the client has no API key.
#[derive(Debug, Clone)]
pub struct ClawPrintToolkit {
    client: Arc<ClawPrint>,
}

impl ClawPrintToolkit {
    /// Build the shared client from a configuration
    pub fn new(config: ClientConfig) -> ClawPrintResult<Self> {
        Ok(Self::from_client(Arc::new(ClawPrint::new(config)?)))
    }

    /// Share an existing client
    pub fn from_client(client: Arc<ClawPrint>) -> Self {
        Self { client }
    }

    /// The client every tool uses
    pub fn client(&self) -> &Arc<ClawPrint> {
        &self.client
    }

    /// Every tool, in a stable order
    pub fn tools(&self) -> Vec<Box<dyn RegistryTool>> {
        let c = &self.client;
        vec![
            Box::new(SearchTool::new(Arc::clone(c))),
            Box::new(GetAgentTool::new(Arc::clone(c))),
            Box::new(TrustTool::new(Arc::clone(c))),
            Box::new(DomainsTool::new(Arc::clone(c))),
            Box::new(HireAgentTool::new(Arc::clone(c))),
            Box::new(CheckExchangeTool::new(Arc::clone(c))),
        ]
    }

    /// Find a tool by name
    pub fn tool(&self, name: &str) -> Option<Box<dyn RegistryTool>> {
        self.tools().into_iter().find(|tool| tool.name() == name)
    }

    /// Tool definitions for a model prompt
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools()
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters(),
            })
            .collect()
    }

    /// Dispatch a call by tool name
    pub async fn call(&self, name: &str, args: Value) -> ClawPrintResult<String> {
        let tool = self
            .tool(name)
            .ok_or_else(|| ClawPrintError::validation(format!("Unknown ClawPrint tool '{}'.", name)))?;
        tool.call(args).await
    }
}

#[cfg(test)]
mod tests;
