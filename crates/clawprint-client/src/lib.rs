//! ClawPrint agent registry client
//!
//! This crate provides the HTTP transport and the public [`ClawPrint`] client
//! for searching agents, fetching agent cards and trust scores, registering
//! and updating agents, reporting transactions, and brokering hire requests.
//!
//! ```no_run
//! use clawprint_client::{ClawPrint, SearchQuery};
//! use clawprint_config::ClientConfig;
//!
//! # async fn run() -> clawprint_core::ClawPrintResult<()> {
//! let cp = ClawPrint::new(ClientConfig::builder().api_key("cp_live_...").build()?)?;
//! let results = cp.search(&SearchQuery::new().q("legal").protocol("acp")).await?;
//! for agent in results.agents() {
//!     println!("{:?}", agent.get_str("handle"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod params;
pub mod registry;

// Re-export main types
pub use api::{
    AgentCard, AgentCardResponse, DiscoverResponse, Domain, DomainList, DomainsResponse,
    ExchangeRequest, ExchangeResponse, RegisterResponse, Registration, ReportResponse,
    ScanReport, ScanResponse, SearchResponse, SearchResults, TrustReport, TrustResponse,
    UpdateOutcome, UpdateResponse,
};
pub use client::{Auth, HttpClient, USER_AGENT};
pub use params::{AgentRegistration, HireRequest, SearchQuery, TransactionReport};
pub use registry::ClawPrint;

use clawprint_core::error::ClawPrintError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, ClawPrintError>;
