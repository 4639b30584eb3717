//! Public client: one method per registry endpoint
//!
//! Each method checks its preconditions before any network activity, sends a
//! single request through [`HttpClient`], and wraps the parsed body in the
//! endpoint's response type.

use serde_json::{json, Map, Value};

use clawprint_config::ClientConfig;
use clawprint_core::error::ClawPrintError;
use clawprint_core::types::Response;
use clawprint_core::utils::{join_segment, require, require_list, require_range};

use crate::api::{
    AgentCardResponse, DiscoverResponse, DomainsResponse, ExchangeResponse, RegisterResponse,
    ReportResponse, ScanResponse, SearchResponse, TrustResponse, UpdateResponse,
};
use crate::client::{Auth, HttpClient};
use crate::params::{AgentRegistration, HireRequest, SearchQuery, TransactionReport};
use crate::RegistryResult;

/// Client for the ClawPrint agent registry.
///
/// Read-only methods (`search`, `trust`, `domains`, `discover`, `get_agent`)
/// work without an API key. Cloning is cheap and clones share the connection.
#[derive(Debug, Clone)]
pub struct ClawPrint {
    http: HttpClient,
}

impl ClawPrint {
    /// Create a client from a resolved configuration
    pub fn new(config: ClientConfig) -> RegistryResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client configured from `CLAWPRINT_*` environment variables
    pub fn from_env() -> RegistryResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client around an existing transport
    pub fn with_transport(http: HttpClient) -> Self {
        Self { http }
    }

    /// The shared transport
    pub fn transport(&self) -> &HttpClient {
        &self.http
    }

    /// The resolved configuration
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Search for agents. With an empty query, returns the default page.
    pub async fn search(&self, query: &SearchQuery) -> RegistryResult<SearchResponse> {
        let data = self
            .http
            .get("/v1/agents/search", &query.to_query(), Auth::Public)
            .await?;
        Response::from_value(data)
    }

    /// Evaluate trust for an agent (Know Your Agent)
    pub async fn trust(&self, handle: &str) -> RegistryResult<TrustResponse> {
        require("handle", Some(handle))?;
        let data = self
            .http
            .get(&join_segment("/v1/trust", handle), &[], Auth::Public)
            .await?;
        Response::from_value(data)
    }

    /// Register a new agent. The response carries its API key; store it securely.
    pub async fn register(&self, registration: &AgentRegistration) -> RegistryResult<RegisterResponse> {
        require("name", Some(registration.name.as_str()))?;
        require("handle", Some(registration.handle.as_str()))?;
        require("description", Some(registration.description.as_str()))?;

        let data = self
            .http
            .post("/v1/agents", &registration.to_body(), Auth::Public)
            .await?;
        Response::from_value(data)
    }

    /// Patch fields on an existing agent card. Requires an API key.
    pub async fn update(&self, handle: &str, fields: Map<String, Value>) -> RegistryResult<UpdateResponse> {
        self.http.ensure_auth("update")?;
        require("handle", Some(handle))?;
        if fields.is_empty() {
            return Err(ClawPrintError::validation("At least one field is required for update."));
        }

        let data = self
            .http
            .patch(&join_segment("/v1/agents", handle), &Value::Object(fields), Auth::Required("update"))
            .await?;
        Response::from_value(data)
    }

    /// Report a completed or failed transaction between agents. Requires an API key.
    pub async fn report(&self, report: &TransactionReport) -> RegistryResult<ReportResponse> {
        self.http.ensure_auth("report")?;
        require("provider_handle", Some(report.provider_handle.as_str()))?;
        require("requester_handle", Some(report.requester_handle.as_str()))?;
        require("protocol", Some(report.protocol.as_str()))?;
        require("outcome", Some(report.outcome.as_str()))?;
        if let Some(rating) = report.rating {
            require_range("rating", rating, 1, 5)?;
        }

        let body = serde_json::to_value(report).map_err(|e| {
            ClawPrintError::validation(format!("Report could not be serialized: {}", e))
        })?;
        let data = self
            .http
            .post("/v1/transactions/report", &body, Auth::Required("report"))
            .await?;
        Response::from_value(data)
    }

    /// List capability domains with per-domain agent counts
    pub async fn domains(&self) -> RegistryResult<DomainsResponse> {
        let data = self.http.get("/v1/domains", &[], Auth::Public).await?;
        Response::from_value(data)
    }

    /// Scan text for security threats. Requires an API key.
    pub async fn scan(&self, content: &str) -> RegistryResult<ScanResponse> {
        self.http.ensure_auth("scan")?;
        require("content", Some(content))?;

        let data = self
            .http
            .post("/v1/security/scan", &json!({ "content": content }), Auth::Required("scan"))
            .await?;
        Response::from_value(data)
    }

    /// Fetch the API discovery document
    pub async fn discover(&self) -> RegistryResult<DiscoverResponse> {
        let data = self.http.get("/v1/discover", &[], Auth::Public).await?;
        Response::from_value(data)
    }

    /// Fetch the full agent card for a handle
    pub async fn get_agent(&self, handle: &str) -> RegistryResult<AgentCardResponse> {
        require("handle", Some(handle))?;
        let data = self
            .http
            .get(&join_segment("/v1/agents", handle), &[], Auth::Public)
            .await?;
        Response::from_value(data)
    }

    /// Post a brokered hire request. Requires an API key.
    pub async fn create_exchange_request(&self, request: &HireRequest) -> RegistryResult<ExchangeResponse> {
        self.http.ensure_auth("create_exchange_request")?;
        require_list("domains", &request.domains)?;
        require("task", Some(request.task.as_str()))?;

        let body = serde_json::to_value(request).map_err(|e| {
            ClawPrintError::validation(format!("Hire request could not be serialized: {}", e))
        })?;
        let data = self
            .http
            .post("/v1/exchange/requests", &body, Auth::Required("create_exchange_request"))
            .await?;
        Response::from_value(data)
    }

    /// Poll the status of a hire request. Requires an API key.
    pub async fn get_exchange_request(&self, request_id: &str) -> RegistryResult<ExchangeResponse> {
        self.http.ensure_auth("get_exchange_request")?;
        require("request_id", Some(request_id))?;

        let data = self
            .http
            .get(
                &join_segment("/v1/exchange/requests", request_id),
                &[],
                Auth::Required("get_exchange_request"),
            )
            .await?;
        Response::from_value(data)
    }
}
