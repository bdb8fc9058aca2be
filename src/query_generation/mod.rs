//! Query-generation service: turns a taxonomy selection into one
//! engine's worth of search queries, via cache, LLM, or deterministic
//! fallback.

pub mod cache;
pub mod models;
pub mod service;
pub mod strategies;

pub use cache::{CacheStats, QueryCache};
pub use models::{GenerationMethod, QueryCacheKey, QueryGenerationRequest, QueryGenerationResponse};
pub use service::{QueryGenerationError, QueryGenerationService};
