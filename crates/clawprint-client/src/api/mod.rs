//! ClawPrint registry API response types
//!
//! Each endpoint's declared fields are typed; everything else stays reachable
//! through [`Response::raw`]. Every field is optional so a sparse response
//! never fails to decode.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use clawprint_core::types::{ApiObject, Response};

/// Page of agents matching a search
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SearchResults {
    /// Matched entries, as returned
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Value>,
    /// Total matches across all pages
    pub total: Option<u64>,
    /// Page size used
    pub limit: Option<u64>,
    /// Offset used
    pub offset: Option<u64>,
}

impl SearchResults {
    /// Matched agent cards; non-object entries are skipped
    pub fn agents(&self) -> Vec<ApiObject> {
        self.results
            .iter()
            .filter_map(|item| ApiObject::from_value(item.clone()))
            .collect()
    }
}

/// Trust evaluation for one agent
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TrustReport {
    /// Agent handle that was evaluated
    pub handle: Option<String>,
    /// Numeric trust score (0-100)
    pub trust_score: Option<f64>,
    /// Letter grade (e.g. `"B+"`)
    pub grade: Option<String>,
    /// Verification details
    pub verification: Option<ApiObject>,
    /// Reputation details
    pub reputation: Option<ApiObject>,
    /// Transaction summary
    pub transactions: Option<ApiObject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub protocols: Vec<Value>,
    /// Whether the agent speaks ACP
    pub acp_compatible: Option<bool>,
    /// ISO-8601 evaluation timestamp
    pub evaluated_at: Option<String>,
}

/// Result of registering a new agent
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Registration {
    /// Assigned handle
    pub handle: Option<String>,
    /// API key for the new agent; shown once, store it securely
    pub api_key: Option<String>,
}

/// Result of patching an agent card
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UpdateOutcome {
    pub updated: Option<bool>,
}

/// One capability domain, listed either as a bare name or as a card
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "DomainEntry")]
pub struct Domain {
    pub name: Option<String>,
    /// Number of agents registered in this domain
    pub agents: Option<u64>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DomainEntry {
    Name(String),
    Card {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        agents: Option<u64>,
        #[serde(default)]
        description: Option<String>,
    },
}

impl From<DomainEntry> for Domain {
    fn from(entry: DomainEntry) -> Self {
        match entry {
            DomainEntry::Name(name) => Domain {
                name: Some(name),
                ..Domain::default()
            },
            DomainEntry::Card {
                name,
                agents,
                description,
            } => Domain {
                name,
                agents,
                description,
            },
        }
    }
}

/// All capability domains
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DomainList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains: Vec<Domain>,
    pub total: Option<u64>,
}

/// Security scan verdict
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScanReport {
    pub safe: Option<bool>,
    pub quarantined: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub threats: Vec<Value>,
    pub score: Option<f64>,
}

/// Full agent card
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AgentCard {
    pub handle: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub trust_score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub protocols: Vec<Value>,
}

/// Brokered hire request and its status
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ExchangeRequest {
    /// Request identifier to poll with
    #[serde(default, alias = "request_id", deserialize_with = "string_or_number")]
    pub id: Option<String>,
    /// pending, matched, in-progress, completed or failed
    pub status: Option<String>,
}

pub type SearchResponse = Response<SearchResults>;
pub type TrustResponse = Response<TrustReport>;
pub type RegisterResponse = Response<Registration>;
pub type UpdateResponse = Response<UpdateOutcome>;
pub type ReportResponse = Response<ApiObject>;
pub type DomainsResponse = Response<DomainList>;
pub type ScanResponse = Response<ScanReport>;
pub type DiscoverResponse = Response<ApiObject>;
pub type AgentCardResponse = Response<AgentCard>;
pub type ExchangeResponse = Response<ExchangeRequest>;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number id, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trust_report_decodes() {
        let resp = TrustResponse::from_value(json!({
            "handle": "legal-eagle",
            "trust_score": 82,
            "grade": "B+",
            "acp_compatible": true,
            "verification": {"level": "domain"},
            "history": [{"event": "registered"}]
        }))
        .unwrap();

        assert_eq!(resp.trust_score, Some(82.0));
        assert_eq!(resp.grade.as_deref(), Some("B+"));
        assert_eq!(resp.acp_compatible, Some(true));
        assert_eq!(resp.verification.as_ref().unwrap().get_str("level"), Some("domain"));
        assert_eq!(resp.history.len(), 1);
        assert!(resp.protocols.is_empty());
    }

    #[test]
    fn test_null_lists_are_empty() {
        let resp = SearchResponse::from_value(json!({"results": null, "total": 0})).unwrap();
        assert!(resp.results.is_empty());
        assert_eq!(resp.total, Some(0));
    }

    #[test]
    fn test_domains_decode() {
        let resp = DomainsResponse::from_value(json!({
            "domains": [{"name": "legal-research", "agents": 12}, {"name": "code-review"}],
            "total": 2
        }))
        .unwrap();
        assert_eq!(resp.domains.len(), 2);
        assert_eq!(resp.domains[0].agents, Some(12));
        assert_eq!(resp.domains[1].agents, None);
    }

    #[test]
    fn test_domains_listed_by_name() {
        let body = json!({"domains": ["code-review", "translation"]});
        let resp = DomainsResponse::from_value(body.clone()).unwrap();
        assert_eq!(resp.domains.len(), 2);
        assert_eq!(resp.domains[0].name.as_deref(), Some("code-review"));
        assert_eq!(resp.domains[1].agents, None);
        assert_eq!(resp.to_value(), body);
    }

    #[test]
    fn test_search_results_keep_any_entry() {
        let resp = SearchResponse::from_value(json!({
            "results": [{"handle": "codebot"}, "legacy-handle"],
            "total": 2
        }))
        .unwrap();
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[1], json!("legacy-handle"));

        let agents = resp.agents();
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].get_str("handle"), Some("codebot"));
    }

    #[test]
    fn test_exchange_id_forms() {
        let resp = ExchangeResponse::from_value(json!({"id": "req_abc123", "status": "pending"})).unwrap();
        assert_eq!(resp.id.as_deref(), Some("req_abc123"));

        let resp = ExchangeResponse::from_value(json!({"request_id": 42})).unwrap();
        assert_eq!(resp.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_open_ended_response_keeps_everything() {
        let body = json!({"version": "1", "endpoints": [{"path": "/v1/discover"}]});
        let resp = DiscoverResponse::from_value(body.clone()).unwrap();
        assert_eq!(resp.objects("endpoints")[0].get_str("path"), Some("/v1/discover"));
        assert_eq!(resp.to_value(), body);
    }
}
