//! Request/response and cache-key types for query generation.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub use crate::models::GenerationMethod;
use crate::taxonomy::{FundingSearchCategory, GeographicScope, SearchEngineType};

#[derive(Debug, Clone)]
pub struct QueryGenerationRequest {
    pub session_id: Uuid,
    /// Non-empty; validated by [`super::service::QueryGenerationService`].
    pub categories: BTreeSet<FundingSearchCategory>,
    pub geographic: GeographicScope,
    pub engine: SearchEngineType,
    /// Must be in `[1, 50]`; validated by the service.
    pub max_queries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryCacheKey {
    pub categories: BTreeSet<FundingSearchCategory>,
    pub geographic: GeographicScope,
    pub engine: SearchEngineType,
    pub max_queries: usize,
}

impl From<&QueryGenerationRequest> for QueryCacheKey {
    fn from(request: &QueryGenerationRequest) -> Self {
        Self {
            categories: request.categories.clone(),
            geographic: request.geographic,
            engine: request.engine,
            max_queries: request.max_queries,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryGenerationResponse {
    pub queries: Vec<String>,
    pub search_engine: SearchEngineType,
    pub from_cache: bool,
    pub generated_at: DateTime<Utc>,
    pub duration_millis: i64,
    pub cache_key: QueryCacheKey,
    pub generation_method: GenerationMethod,
}
