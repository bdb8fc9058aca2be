//! GrantScout Library
//!
//! Core modules for the funding discovery pipeline: taxonomy, LLM-backed
//! query generation, search adapters, anti-spam filtering, the domain
//! blacklist cache, confidence scoring, the result processor, and the
//! workflow orchestrator that ties them together.

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

pub mod antispam;
pub mod blacklist;
pub mod config;
pub mod db;
pub mod llm;
pub mod models;
pub mod processor;
pub mod query_generation;
pub mod scoring;
pub mod search;
pub mod store;
pub mod taxonomy;
pub mod utils;
pub mod workflow;

pub use config::Config;

/// Application shared state: Rust's type system is the DI container. Every
/// service is wrapped in `Arc` for cheap cloning and thread safety.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub store: Arc<dyn store::Store>,
    pub blacklist_cache: Arc<blacklist::DomainBlacklistCache>,
    pub query_generation: Arc<query_generation::QueryGenerationService>,
    pub adapters: Arc<search::AdapterRegistry>,
    pub processor: Arc<processor::SearchResultProcessor>,
    pub orchestrator: Arc<workflow::SearchWorkflowOrchestrator>,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db = db::create_pool(&config.database.url).await?;
        db::run_migrations(&db).await?;

        let store: Arc<dyn store::Store> = Arc::new(store::SqliteStore::new(db.clone()));

        let blacklist_cache = Arc::new(blacklist::DomainBlacklistCache::new(
            store.clone(),
            Duration::from_secs(config.blacklist_cache.ttl_secs),
            config.blacklist_cache.max_size,
        ));

        let llm_client = if config.llm.enabled {
            Some(Arc::new(llm::LlmClient::new(config.llm.to_client_config())?))
        } else {
            None
        };

        let query_cache = query_generation::QueryCache::new(
            config.query_cache.max_size,
            Duration::from_secs(config.query_cache.ttl_secs),
        );
        let query_generation =
            Arc::new(query_generation::QueryGenerationService::new(query_cache, llm_client, store.clone()));

        let adapters = Arc::new(search::AdapterRegistry::new(&config.adapters.as_map()));

        let processor = Arc::new(processor::SearchResultProcessor::new(
            blacklist_cache.clone(),
            store.clone(),
        ));

        let orchestrator = Arc::new(workflow::SearchWorkflowOrchestrator::new(
            query_generation.clone(),
            adapters.clone(),
            processor.clone(),
            store.clone(),
            config.processor.confidence_threshold_decimal(),
            Duration::from_secs(config.workflow.total_timeout_secs),
            Duration::from_secs(15),
        ));

        Ok(Self { db, store, blacklist_cache, query_generation, adapters, processor, orchestrator })
    }
}
