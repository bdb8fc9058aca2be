//! Adapter registry: a factory keyed by [`SearchEngineType`], mirroring the
//! teacher's `create_adapter()` dispatch for cluster adapters — a tagged
//! match, not a trait-object plugin registry, since the engine set is
//! closed and known at compile time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::SearchAdapterSettings;
use crate::taxonomy::SearchEngineType;

use super::SearchAdapter;
use super::adapters::{BraveAdapter, PerplexicaAdapter, SearxngAdapter, SerperAdapter, TavilyAdapter};

/// Holds one constructed adapter per configured engine.
pub struct AdapterRegistry {
    adapters: HashMap<SearchEngineType, Arc<dyn SearchAdapter>>,
}

impl AdapterRegistry {
    pub fn new(settings: &HashMap<SearchEngineType, SearchAdapterSettings>) -> Self {
        let mut adapters: HashMap<SearchEngineType, Arc<dyn SearchAdapter>> = HashMap::new();

        for (engine, config) in settings {
            if !config.enabled {
                continue;
            }
            let adapter: Arc<dyn SearchAdapter> = match engine {
                SearchEngineType::Brave => Arc::new(BraveAdapter::new(config.clone())),
                SearchEngineType::Serper => Arc::new(SerperAdapter::new(config.clone())),
                SearchEngineType::Searxng => Arc::new(SearxngAdapter::new(config.clone())),
                SearchEngineType::Tavily => Arc::new(TavilyAdapter::new(config.clone())),
                SearchEngineType::Perplexica => Arc::new(PerplexicaAdapter::new(config.clone())),
            };
            adapters.insert(*engine, adapter);
        }

        Self { adapters }
    }

    pub fn get(&self, engine: SearchEngineType) -> Option<Arc<dyn SearchAdapter>> {
        self.adapters.get(&engine).cloned()
    }

    pub fn enabled_engines(&self) -> Vec<SearchEngineType> {
        self.adapters.keys().copied().collect()
    }
}
