//! Request parameters for registry operations

use serde::Serialize;
use serde_json::{Map, Value};

/// Search filters; every field is optional and unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Free-text query
    pub q: Option<String>,
    /// Domain filter (e.g. `"legal-research"`)
    pub domain: Option<String>,
    /// Protocol filter (e.g. `"acp"`)
    pub protocol: Option<String>,
    /// Maximum cost
    pub max_cost: Option<f64>,
    /// Minimum verification level
    pub min_verification: Option<String>,
    /// Minimum trust score on the 0-100 scale
    pub min_score: Option<f64>,
    /// Sort order (e.g. `"trust_score"`)
    pub sort: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Page offset
    pub offset: Option<u32>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    pub fn min_verification(mut self, level: impl Into<String>) -> Self {
        self.min_verification = Some(level.into());
        self
    }

    pub fn min_score(mut self, score: f64) -> Self {
        self.min_score = Some(score);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Query-string pairs, with `None` for unset filters
    pub fn to_query(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("q", self.q.clone()),
            ("domain", self.domain.clone()),
            ("protocol", self.protocol.clone()),
            ("max_cost", self.max_cost.map(render_float)),
            ("min_verification", self.min_verification.clone()),
            ("min_score", self.min_score.map(render_float)),
            ("sort", self.sort.clone()),
            ("limit", self.limit.map(|v| v.to_string())),
            ("offset", self.offset.map(|v| v.to_string())),
        ]
    }
}

/// Float filter value; whole numbers keep their `.0` (`10.0`, not `10`)
fn render_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// A new agent card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentRegistration {
    /// Human-readable name
    pub name: String,
    /// Unique handle (slug)
    pub handle: String,
    /// What the agent does
    pub description: String,
    /// Service descriptors
    pub services: Option<Vec<Value>>,
    /// Protocol descriptors
    pub protocols: Option<Vec<Value>>,
    /// Additional card fields
    pub extra: Map<String, Value>,
}

impl AgentRegistration {
    pub fn new(name: impl Into<String>, handle: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn services(mut self, services: Vec<Value>) -> Self {
        self.services = Some(services);
        self
    }

    pub fn protocols(mut self, protocols: Vec<Value>) -> Self {
        self.protocols = Some(protocols);
        self
    }

    /// Add an extra card field
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Request body; named fields take precedence over extras with the same key
    pub fn to_body(&self) -> Value {
        let mut body = self.extra.clone();
        body.insert("name".to_string(), Value::from(self.name.clone()));
        body.insert("handle".to_string(), Value::from(self.handle.clone()));
        body.insert("description".to_string(), Value::from(self.description.clone()));
        if let Some(services) = &self.services {
            body.insert("services".to_string(), Value::Array(services.clone()));
        }
        if let Some(protocols) = &self.protocols {
            body.insert("protocols".to_string(), Value::Array(protocols.clone()));
        }
        Value::Object(body)
    }
}

/// Outcome of a transaction between two agents
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionReport {
    pub provider_handle: String,
    pub requester_handle: String,
    /// Protocol used (e.g. `"acp"`)
    pub protocol: String,
    /// e.g. `"completed"` or `"failed"`
    pub outcome: String,
    /// 1-5 star rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_tx_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_actual: Option<f64>,
}

impl TransactionReport {
    pub fn new(
        provider_handle: impl Into<String>,
        requester_handle: impl Into<String>,
        protocol: impl Into<String>,
        outcome: impl Into<String>,
    ) -> Self {
        Self {
            provider_handle: provider_handle.into(),
            requester_handle: requester_handle.into(),
            protocol: protocol.into(),
            outcome: outcome.into(),
            ..Self::default()
        }
    }

    pub fn rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn external_tx_id(mut self, id: impl Into<String>) -> Self {
        self.external_tx_id = Some(id.into());
        self
    }

    pub fn response_time_ms(mut self, ms: u64) -> Self {
        self.response_time_ms = Some(ms);
        self
    }

    pub fn cost_actual(mut self, cost: f64) -> Self {
        self.cost_actual = Some(cost);
        self
    }
}

/// A brokered hire request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HireRequest {
    /// Capability domains the hired agent should cover
    pub domains: Vec<String>,
    /// Plain-language task description
    pub task: String,
    /// Structured requirements (budget, deadline, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Map<String, Value>>,
}

impl HireRequest {
    pub fn new(domains: Vec<String>, task: impl Into<String>) -> Self {
        Self {
            domains,
            task: task.into(),
            requirements: None,
        }
    }

    /// Attach requirements; an empty map is not sent
    pub fn requirements(mut self, requirements: Map<String, Value>) -> Self {
        self.requirements = Some(requirements).filter(|r| !r.is_empty());
        self
    }
}
