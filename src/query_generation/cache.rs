//! In-process query cache: write-once (a cache key is only ever populated
//! by the miss path, never overwritten), 24h TTL, LRU eviction at 1000
//! entries. Read-through only — there is no manual invalidation path
//! because generated queries for a given (category, scope, engine) tuple
//! never need to change mid-TTL.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::sync::Cache;

use super::models::QueryCacheKey;

pub struct CacheStats {
    pub size: u64,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 { 0.0 } else { self.hits as f64 / total as f64 }
    }
}

pub struct QueryCache {
    cache: Cache<QueryCacheKey, Vec<String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryCache {
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(max_capacity).time_to_live(ttl).build();
        Self { cache, hits: AtomicU64::new(0), misses: AtomicU64::new(0) }
    }

    pub fn get(&self, key: &QueryCacheKey) -> Option<Vec<String>> {
        let hit = self.cache.get(key);
        if hit.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        hit
    }

    /// Populates the key if absent. Intentionally does not overwrite: the
    /// cache is write-once per key within a TTL window.
    pub fn insert_if_absent(&self, key: QueryCacheKey, queries: Vec<String>) {
        if self.cache.get(&key).is_none() {
            self.cache.insert(key, queries);
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.run_pending_tasks();
        CacheStats {
            size: self.cache.entry_count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{FundingSearchCategory, GeographicScope, SearchEngineType};

    fn key() -> QueryCacheKey {
        QueryCacheKey {
            categories: [FundingSearchCategory::RuralDevelopment].into_iter().collect(),
            geographic: GeographicScope::Global,
            engine: SearchEngineType::Brave,
            max_queries: 5,
        }
    }

    #[test]
    fn miss_then_hit_updates_stats() {
        let cache = QueryCache::new(1000, Duration::from_secs(60));
        assert!(cache.get(&key()).is_none());
        cache.insert_if_absent(key(), vec!["rural development grant".to_string()]);
        assert!(cache.get(&key()).is_some());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn insert_is_write_once() {
        let cache = QueryCache::new(1000, Duration::from_secs(60));
        cache.insert_if_absent(key(), vec!["first".to_string()]);
        cache.insert_if_absent(key(), vec!["second".to_string()]);
        assert_eq!(cache.get(&key()), Some(vec!["first".to_string()]));
    }
}
