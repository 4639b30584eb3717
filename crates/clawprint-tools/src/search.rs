use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use clawprint_client::{ClawPrint, SearchQuery};
use clawprint_core::error::{ClawPrintError, ClawPrintResult};

use crate::{json_result, parse_args, RegistryTool};

#[derive(Debug, Deserialize)]
struct SearchInput {
    query: String,
    #[serde(default)]
    domain: Option<String>,
    /// Fraction in [0, 1]; the registry expects 0-100
    #[serde(default)]
    min_trust: Option<f64>,
}

/// Searches the registry for agents matching a capability.
pub struct SearchTool {
    client: Arc<ClawPrint>,
}

impl SearchTool {
    pub fn new(client: Arc<ClawPrint>) -> Self {
        Self { client }
    }
}

/// Convert a 0-1 trust fraction to the registry's 0-100 scale
pub fn trust_fraction_to_score(fraction: f64) -> f64 {
    (fraction * 10_000.0).round() / 100.0
}

#[async_trait]
impl RegistryTool for SearchTool {
    fn name(&self) -> &str {
        "clawprint_search"
    }

    fn description(&self) -> &str {
        "Search the ClawPrint agent registry. Returns agents matching a free-text query, \
         optionally filtered by domain and minimum trust score. Useful for discovering \
         agents with specific capabilities."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Free-text search query describing the capability you need."
                },
                "domain": {
                    "type": "string",
                    "description": "Optional domain filter (e.g. 'code-review', 'data-analysis'). Use the clawprint_domains tool to discover valid domains."
                },
                "min_trust": {
                    "type": "number",
                    "minimum": 0.0,
                    "maximum": 1.0,
                    "description": "Minimum trust score between 0.0 and 1.0."
                }
            },
            "required": ["query"]
        })
    }

    async fn call(&self, args: Value) -> ClawPrintResult<String> {
        let input: SearchInput = parse_args(self.name(), args)?;

        let mut query = SearchQuery::new().q(input.query);
        if let Some(domain) = input.domain.filter(|d| !d.trim().is_empty()) {
            query = query.domain(domain);
        }
        if let Some(min_trust) = input.min_trust {
            if !(0.0..=1.0).contains(&min_trust) {
                return Err(ClawPrintError::validation("min_trust must be between 0.0 and 1.0."));
            }
            query = query.min_score(trust_fraction_to_score(min_trust));
        }

        debug!(tool = self.name(), "running registry tool");
        let results = self.client.search(&query).await?;
        json_result(&results)
    }
}
