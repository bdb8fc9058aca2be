//! Search adapters: one capability trait, one implementation per
//! engine. The orchestrator only ever sees `dyn SearchAdapter`.

pub mod adapters;
mod registry;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::taxonomy::SearchEngineType;

pub use registry::AdapterRegistry;

/// A single organic result from a search engine, before any scoring or
/// filtering has happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub description: String,
}

/// Every way an adapter call can fail. A zero-result response is NOT an
/// error — it's a normal, empty `Vec<SearchResult>`.
#[derive(Debug, Error)]
pub enum SearchAdapterError {
    #[error("{engine:?} request timed out after {timeout_secs}s")]
    Timeout { engine: SearchEngineType, timeout_secs: u64 },

    #[error("{engine:?} transport error: {source}")]
    Transport { engine: SearchEngineType, #[source] source: reqwest::Error },

    #[error("{engine:?} returned HTTP {status}: {body}")]
    HttpStatus { engine: SearchEngineType, status: u16, body: String },

    #[error("{engine:?} returned a response shape we don't recognize: {detail}")]
    UnexpectedShape { engine: SearchEngineType, detail: String },

    #[error("{engine:?} is not configured (missing API key or base URL)")]
    NotConfigured { engine: SearchEngineType },
}

impl SearchAdapterError {
    pub fn engine(&self) -> SearchEngineType {
        match self {
            Self::Timeout { engine, .. }
            | Self::Transport { engine, .. }
            | Self::HttpStatus { engine, .. }
            | Self::UnexpectedShape { engine, .. }
            | Self::NotConfigured { engine } => *engine,
        }
    }
}

/// Capability trait every search engine integration implements. Kept small
/// and synchronous-feeling (one call in, one `Vec` out) so the orchestrator
/// can fan out over `Box<dyn SearchAdapter>` without caring which engine it
/// is talking to.
#[async_trait]
pub trait SearchAdapter: Send + Sync {
    fn engine(&self) -> SearchEngineType;

    /// Run a single search. Returns at most `max_results` results in
    /// engine-returned order. An empty `Vec` means zero results, not a
    /// failure.
    async fn search(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchResult>, SearchAdapterError>;

    /// Cheap reachability probe; does not count against adapter call
    /// budgets in the workflow orchestrator.
    async fn is_available(&self) -> bool;
}
