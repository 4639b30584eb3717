use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use clawprint_client::ClawPrint;
use clawprint_core::error::ClawPrintResult;

use crate::{json_result, RegistryTool};

/// Lists capability domains, for picking valid search filters.
pub struct DomainsTool {
    client: Arc<ClawPrint>,
}

impl DomainsTool {
    pub fn new(client: Arc<ClawPrint>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RegistryTool for DomainsTool {
    fn name(&self) -> &str {
        "clawprint_domains"
    }

    fn description(&self) -> &str {
        "List all available capability domains in the ClawPrint registry. Returns domain \
         names and agent counts. Useful for discovering valid domain filters before searching."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    // Takes no arguments; anything passed is ignored
    async fn call(&self, _args: Value) -> ClawPrintResult<String> {
        debug!(tool = self.name(), "running registry tool");
        let domains = self.client.domains().await?;
        json_result(&domains)
    }
}
