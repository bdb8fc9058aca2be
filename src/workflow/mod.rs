//! Search workflow orchestrator: fans a discovery request out across
//! engines and queries, fans results back in preserving source order, and
//! hands them to the processor as one sequential session.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use futures::future::join_all;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{DiscoverySession, SessionStatus, SessionType};
use crate::processor::{ProcessingContext, SearchResultProcessor};
use crate::query_generation::{QueryGenerationRequest, QueryGenerationService};
use crate::search::{AdapterRegistry, SearchResult};
use crate::store::Store;
use crate::taxonomy::{FundingSearchCategory, GeographicScope, SearchEngineType};

#[derive(Debug, Clone)]
pub struct ExecuteSearchRequest {
    pub session_type: SessionType,
    pub category: FundingSearchCategory,
    pub geographic_scope: Option<GeographicScope>,
    pub engines: Vec<SearchEngineType>,
    pub max_queries_per_engine: usize,
    pub max_results_per_query: u32,
}

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub struct SearchWorkflowOrchestrator {
    query_generation: Arc<QueryGenerationService>,
    adapters: Arc<AdapterRegistry>,
    processor: Arc<SearchResultProcessor>,
    store: Arc<dyn Store>,
    confidence_threshold: rust_decimal::Decimal,
    total_timeout: Duration,
    adapter_timeout: Duration,
}

impl SearchWorkflowOrchestrator {
    pub fn new(
        query_generation: Arc<QueryGenerationService>,
        adapters: Arc<AdapterRegistry>,
        processor: Arc<SearchResultProcessor>,
        store: Arc<dyn Store>,
        confidence_threshold: rust_decimal::Decimal,
        total_timeout: Duration,
        adapter_timeout: Duration,
    ) -> Self {
        Self {
            query_generation,
            adapters,
            processor,
            store,
            confidence_threshold,
            total_timeout,
            adapter_timeout,
        }
    }

    pub async fn execute(
        &self,
        request: ExecuteSearchRequest,
    ) -> Result<DiscoverySession, WorkflowError> {
        if request.engines.is_empty() {
            return Err(WorkflowError::InvalidRequest("at least one engine is required".to_string()));
        }

        let mut session = DiscoverySession::new(request.session_type, Utc::now());
        if let Err(err) = self.store.insert_session(&session).await {
            tracing::error!(error = %err, "failed to persist new session");
        }

        let run = tokio::time::timeout(self.total_timeout, self.run(&request, session.session_id));

        match run.await {
            Ok(Ok(outcome)) => {
                session.queries_generated = outcome.queries_generated as i64;
                session.results_fetched = outcome.results_fetched as i64;
                session.candidates_created =
                    (outcome.stats.high_confidence + outcome.stats.low_confidence) as i64;
                session.candidates_skipped = outcome.stats.low_confidence as i64;
                session.domains_blacklisted_hits = outcome.stats.blacklisted as i64;
                session.errors_encountered = outcome.errors as i64;
                session.status = if outcome.errors == 0 {
                    SessionStatus::Completed
                } else if outcome.results_fetched > 0 {
                    SessionStatus::Partial
                } else {
                    SessionStatus::Failed
                };
            },
            Ok(Err(_)) | Err(_) => {
                session.status = SessionStatus::Failed;
            },
        }

        session.completed_at = Some(Utc::now());
        if let Err(err) = self.store.update_session_status(
            session.session_id,
            session.status,
            session.completed_at,
        ).await {
            tracing::error!(error = %err, "failed to update session status");
        }
        if let Err(err) = self.store.update_session_counters(&session).await {
            tracing::error!(error = %err, "failed to update session counters");
        }

        Ok(session)
    }

    async fn run(
        &self,
        request: &ExecuteSearchRequest,
        session_id: Uuid,
    ) -> Result<RunOutcome, WorkflowError> {
        // Generate up to `max_queries_per_engine` queries per engine.
        let query_futures = request.engines.iter().map(|engine| {
            let query_generation = self.query_generation.clone();
            let engine = *engine;
            let req = QueryGenerationRequest {
                session_id,
                categories: [request.category].into_iter().collect(),
                geographic: request.geographic_scope.unwrap_or(GeographicScope::Global),
                engine,
                max_queries: request.max_queries_per_engine,
            };
            async move { (engine, query_generation.generate_queries(req).await) }
        });
        let query_results = join_all(query_futures).await;

        let mut engine_queries: HashMap<SearchEngineType, Vec<String>> = HashMap::new();
        let mut queries_generated = 0u64;
        for (engine, result) in query_results {
            match result {
                Ok(response) => {
                    queries_generated += response.queries.len() as u64;
                    engine_queries.insert(engine, response.queries);
                },
                Err(err) => {
                    tracing::warn!(error = %err, ?engine, "query generation failed for engine");
                },
            }
        }

        // Fan out every (engine, query) pair concurrently.
        let call_futures = engine_queries.iter().flat_map(|(engine, queries)| {
            queries.iter().map(move |query| {
                let adapters = self.adapters.clone();
                let engine = *engine;
                let query = query.clone();
                let max_results = request.max_results_per_query;
                let timeout = self.adapter_timeout;
                async move {
                    let Some(adapter) = adapters.get(engine) else {
                        return (engine, query, Err("adapter not configured".to_string()));
                    };
                    let start = Instant::now();
                    let outcome =
                        tokio::time::timeout(timeout, adapter.search(&query, max_results)).await;
                    let duration = start.elapsed();
                    match outcome {
                        Ok(Ok(results)) => (engine, query, Ok((results, duration))),
                        Ok(Err(err)) => (engine, query, Err(err.to_string())),
                        Err(_) => (engine, query, Err("adapter call timed out".to_string())),
                    }
                }
            })
        });
        let call_results: Vec<_> = join_all(call_futures).await;

        // Fan in, preserving source order (engines as iterated, queries
        // within an engine in generation order).
        let mut ordered_results: Vec<(SearchResult, Option<String>)> = Vec::new();
        let mut errors = 0u64;
        for (engine, query_text, outcome) in call_results {
            match outcome {
                Ok((results, duration)) => {
                    let zero_result = results.is_empty();
                    self.record_stats(session_id, engine, &query_text, results.len(), zero_result, duration, None)
                        .await;
                    for result in results {
                        ordered_results.push((result, Some(engine.as_str().to_string())));
                    }
                },
                Err(err) => {
                    errors += 1;
                    self.record_stats(
                        session_id,
                        engine,
                        &query_text,
                        0,
                        true,
                        Duration::ZERO,
                        Some(err),
                    )
                    .await;
                },
            }
        }

        let results_fetched = ordered_results.len() as u64;

        let mut context =
            ProcessingContext::new(session_id, request.geographic_scope, self.confidence_threshold);
        self.processor.process(&mut context, ordered_results).await;

        Ok(RunOutcome {
            queries_generated,
            results_fetched,
            errors,
            stats: context.stats().clone(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    async fn record_stats(
        &self,
        session_id: Uuid,
        engine: SearchEngineType,
        query_text: &str,
        results_count: usize,
        zero_result: bool,
        duration: Duration,
        error: Option<String>,
    ) {
        let stats = crate::models::SearchSessionStatistics {
            stat_id: Uuid::new_v4(),
            session_id,
            search_engine: engine,
            query_text: query_text.to_string(),
            results_count: results_count as i64,
            zero_result,
            duration_millis: duration.as_millis() as i64,
            error,
            recorded_at: Utc::now(),
        };
        if let Err(err) = self.store.insert_search_stats(&stats).await {
            tracing::error!(error = %err, "failed to persist search session statistics");
        }
    }
}

struct RunOutcome {
    queries_generated: u64,
    results_fetched: u64,
    errors: u64,
    stats: crate::processor::ProcessingStatistics,
}
