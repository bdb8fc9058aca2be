//! Query-generation service: cache-first, LLM-backed with a
//! deterministic fallback, fire-and-forget persistence.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::llm::LlmClient;
use crate::models::{GenerationMethod as PersistedGenerationMethod, SearchQuery};
use crate::store::Store;
use crate::taxonomy::{FundingSearchCategory, GeographicScope};
use crate::utils::unique_ordered;

use super::cache::QueryCache;
use super::models::{GenerationMethod, QueryCacheKey, QueryGenerationRequest, QueryGenerationResponse};
use super::strategies::{AiOptimizedStrategy, KeywordStrategy, QueryStrategy};

#[derive(Debug, Error)]
pub enum QueryGenerationError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("query generation failed: {0}")]
    GenerationFailed(String),
}

pub struct QueryGenerationService {
    cache: QueryCache,
    llm: Option<Arc<LlmClient>>,
    store: Arc<dyn Store>,
}

impl QueryGenerationService {
    pub fn new(cache: QueryCache, llm: Option<Arc<LlmClient>>, store: Arc<dyn Store>) -> Self {
        Self { cache, llm, store }
    }

    pub async fn generate_queries(
        &self,
        request: QueryGenerationRequest,
    ) -> Result<QueryGenerationResponse, QueryGenerationError> {
        if request.categories.is_empty() {
            return Err(QueryGenerationError::InvalidRequest(
                "categories must not be empty".to_string(),
            ));
        }
        if request.max_queries == 0 || request.max_queries > 50 {
            return Err(QueryGenerationError::InvalidRequest(
                "max_queries must be between 1 and 50".to_string(),
            ));
        }

        let start = Instant::now();
        let cache_key = QueryCacheKey::from(&request);

        if let Some(cached) = self.cache.get(&cache_key) {
            self.persist_fire_and_forget(&request, &cached, GenerationMethod::Cached, None);
            return Ok(QueryGenerationResponse {
                queries: cached,
                search_engine: request.engine,
                from_cache: true,
                generated_at: Utc::now(),
                duration_millis: start.elapsed().as_millis() as i64,
                cache_key,
                generation_method: GenerationMethod::Cached,
            });
        }

        let (queries, method) = self.generate_fresh(&request).await?;
        let deduped: Vec<String> = unique_ordered(queries);
        let capped: Vec<String> = deduped.into_iter().take(request.max_queries).collect();

        if capped.is_empty() {
            return Err(QueryGenerationError::GenerationFailed(
                "no usable queries produced".to_string(),
            ));
        }

        let ai_model = match method {
            GenerationMethod::Ai => self.llm.as_ref().map(|llm| llm.model_name().to_string()),
            GenerationMethod::Fallback | GenerationMethod::Cached => None,
        };

        self.cache.insert_if_absent(cache_key.clone(), capped.clone());
        self.persist_fire_and_forget(&request, &capped, method, ai_model);

        Ok(QueryGenerationResponse {
            queries: capped,
            search_engine: request.engine,
            from_cache: false,
            generated_at: Utc::now(),
            duration_millis: start.elapsed().as_millis() as i64,
            cache_key,
            generation_method: method,
        })
    }

    async fn generate_fresh(
        &self,
        request: &QueryGenerationRequest,
    ) -> Result<(Vec<String>, GenerationMethod), QueryGenerationError> {
        let is_keyword = request.engine.is_keyword_engine();

        let Some(llm) = &self.llm else {
            return Ok((self.fallback_for(request, is_keyword), GenerationMethod::Fallback));
        };

        let prompt = if is_keyword {
            KeywordStrategy::build_prompt(&request.categories, request.geographic)
        } else {
            AiOptimizedStrategy::build_prompt(&request.categories, request.geographic)
        };

        match llm.generate(&prompt).await {
            Ok(raw) => {
                let parsed = if is_keyword {
                    KeywordStrategy::parse_llm_response(&raw, request.max_queries)
                } else {
                    AiOptimizedStrategy::parse_llm_response(&raw, request.max_queries)
                };
                if parsed.is_empty() {
                    Ok((self.fallback_for(request, is_keyword), GenerationMethod::Fallback))
                } else {
                    Ok((parsed, GenerationMethod::Ai))
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "LLM unavailable, falling back to deterministic queries");
                Ok((self.fallback_for(request, is_keyword), GenerationMethod::Fallback))
            },
        }
    }

    fn fallback_for(&self, request: &QueryGenerationRequest, is_keyword: bool) -> Vec<String> {
        if is_keyword {
            KeywordStrategy::fallback_queries(
                &request.categories,
                request.geographic,
                request.max_queries,
            )
        } else {
            AiOptimizedStrategy::fallback_queries(
                &request.categories,
                request.geographic,
                request.max_queries,
            )
        }
    }

    /// Never lets a persistence failure affect the caller's response.
    fn persist_fire_and_forget(
        &self,
        request: &QueryGenerationRequest,
        queries: &[String],
        method: GenerationMethod,
        ai_model: Option<String>,
    ) {
        let store = self.store.clone();
        let session_id = request.session_id;
        let engine = request.engine;
        let tags = request_tags(&request.categories, request.geographic);
        let persisted_method = match method {
            GenerationMethod::Ai => PersistedGenerationMethod::Ai,
            GenerationMethod::Fallback => PersistedGenerationMethod::Fallback,
            GenerationMethod::Cached => PersistedGenerationMethod::Cached,
        };
        let queries = queries.to_vec();

        tokio::spawn(async move {
            for query_text in queries {
                let record = SearchQuery {
                    query_id: Uuid::new_v4(),
                    session_id,
                    query_text,
                    search_engine: engine,
                    tags: sqlx::types::Json(tags.clone()),
                    generation_method: persisted_method,
                    ai_model: ai_model.clone(),
                    generated_at: Utc::now(),
                };
                if let Err(err) = store.insert_search_query(&record).await {
                    tracing::error!(error = %err, "failed to persist search query");
                }
            }
        });
    }
}

/// Analytics tags, e.g. `"CATEGORY:STEM_EDUCATION"`, `"GEOGRAPHY:BULGARIA"`.
fn request_tags(
    categories: &std::collections::BTreeSet<FundingSearchCategory>,
    geographic: GeographicScope,
) -> Vec<String> {
    let mut tags: Vec<String> =
        categories.iter().map(|c| format!("CATEGORY:{}", enum_tag(c))).collect();
    tags.push(format!("GEOGRAPHY:{}", enum_tag(&geographic)));
    tags
}

fn enum_tag<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => "UNKNOWN".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::store::MockStore;
    use crate::taxonomy::SearchEngineType;

    use super::*;

    fn request(engine: SearchEngineType) -> QueryGenerationRequest {
        QueryGenerationRequest {
            session_id: Uuid::new_v4(),
            categories: [FundingSearchCategory::RuralDevelopment].into_iter().collect(),
            geographic: GeographicScope::Global,
            engine,
            max_queries: 5,
        }
    }

    #[tokio::test]
    async fn without_llm_client_falls_back_immediately() {
        let service = QueryGenerationService::new(
            QueryCache::new(1000, Duration::from_secs(60)),
            None,
            Arc::new(MockStore::default()),
        );

        let response = service.generate_queries(request(SearchEngineType::Brave)).await.unwrap();
        assert_eq!(response.generation_method, GenerationMethod::Fallback);
        assert!(!response.from_cache);
        assert!(!response.queries.is_empty());
    }

    #[tokio::test]
    async fn zero_max_queries_is_rejected() {
        let service = QueryGenerationService::new(
            QueryCache::new(1000, Duration::from_secs(60)),
            None,
            Arc::new(MockStore::default()),
        );
        let mut req = request(SearchEngineType::Brave);
        req.max_queries = 0;

        let result = service.generate_queries(req).await;
        assert!(matches!(result, Err(QueryGenerationError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn max_queries_above_fifty_is_rejected() {
        let service = QueryGenerationService::new(
            QueryCache::new(1000, Duration::from_secs(60)),
            None,
            Arc::new(MockStore::default()),
        );
        let mut req = request(SearchEngineType::Brave);
        req.max_queries = 51;

        let result = service.generate_queries(req).await;
        assert!(matches!(result, Err(QueryGenerationError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn max_queries_at_boundary_of_fifty_is_accepted() {
        let service = QueryGenerationService::new(
            QueryCache::new(1000, Duration::from_secs(60)),
            None,
            Arc::new(MockStore::default()),
        );
        let mut req = request(SearchEngineType::Brave);
        req.max_queries = 50;

        let result = service.generate_queries(req).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn empty_categories_is_rejected() {
        let service = QueryGenerationService::new(
            QueryCache::new(1000, Duration::from_secs(60)),
            None,
            Arc::new(MockStore::default()),
        );
        let mut req = request(SearchEngineType::Brave);
        req.categories.clear();

        let result = service.generate_queries(req).await;
        assert!(matches!(result, Err(QueryGenerationError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn second_call_for_same_key_is_served_from_cache() {
        let service = QueryGenerationService::new(
            QueryCache::new(1000, Duration::from_secs(60)),
            None,
            Arc::new(MockStore::default()),
        );

        let first = service.generate_queries(request(SearchEngineType::Brave)).await.unwrap();
        assert_eq!(first.generation_method, GenerationMethod::Fallback);
        assert!(!first.from_cache);

        let second = service.generate_queries(request(SearchEngineType::Brave)).await.unwrap();
        assert_eq!(second.generation_method, GenerationMethod::Cached);
        assert!(second.from_cache);
        assert_eq!(first.queries, second.queries);
    }
}
