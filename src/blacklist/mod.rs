//! Domain blacklist cache: a read-through `moka` cache in front of the
//! primary store, with a `dashmap`-based single-flight guard so a burst of
//! concurrent lookups for the same domain collapses into one store query
//! instead of stampeding it.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use moka::sync::Cache;
use thiserror::Error;
use tokio::sync::Notify;

use crate::store::Store;

#[derive(Debug, Error)]
pub enum BlacklistCacheError {
    #[error("blacklist store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
}

/// Checks whether a domain is blacklisted, backed by the primary store.
/// Missing entries are treated as "not blacklisted" only when the store
/// genuinely returned no row — a store outage is surfaced as an error, never
/// silently treated as "not blacklisted".
pub struct DomainBlacklistCache {
    cache: Cache<String, bool>,
    in_flight: Arc<DashMap<String, Arc<Notify>>>,
    store: Arc<dyn Store>,
}

impl DomainBlacklistCache {
    pub fn new(store: Arc<dyn Store>, ttl: Duration, max_capacity: u64) -> Self {
        let cache = Cache::builder().time_to_live(ttl).max_capacity(max_capacity).build();
        Self { cache, in_flight: Arc::new(DashMap::new()), store }
    }

    /// Check a single domain. Read-through: a cache miss queries the store,
    /// populates the cache, and returns the result.
    pub async fn is_blacklisted(&self, domain: &str) -> Result<bool, BlacklistCacheError> {
        if let Some(hit) = self.cache.get(domain) {
            return Ok(hit);
        }

        loop {
            if let Some(hit) = self.cache.get(domain) {
                return Ok(hit);
            }

            match self.in_flight.entry(domain.to_string()) {
                dashmap::mapref::entry::Entry::Occupied(entry) => {
                    let notify = entry.get().clone();
                    drop(entry);
                    notify.notified().await;
                },
                dashmap::mapref::entry::Entry::Vacant(entry) => {
                    let notify = Arc::new(Notify::new());
                    entry.insert(notify.clone());
                    let result = self.store.is_domain_blacklisted(domain).await;
                    self.in_flight.remove(domain);
                    notify.notify_waiters();

                    let blacklisted = result?;
                    self.cache.insert(domain.to_string(), blacklisted);
                    return Ok(blacklisted);
                },
            }
        }
    }

    /// Check many domains (bounded batch, spec target ≤25 in <100ms warm).
    /// Runs lookups concurrently; a single store failure fails the whole
    /// batch rather than silently dropping entries.
    pub async fn check_batch(
        &self,
        domains: &[String],
    ) -> Result<Vec<(String, bool)>, BlacklistCacheError> {
        let futures = domains.iter().map(|domain| async move {
            self.is_blacklisted(domain).await.map(|b| (domain.clone(), b))
        });
        futures::future::try_join_all(futures).await
    }

    pub fn invalidate(&self, domain: &str) {
        self.cache.invalidate(domain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    #[tokio::test]
    async fn caches_store_result_after_first_lookup() {
        let store = Arc::new(MockStore::with_blacklisted(["spam.tk"]));
        let cache = DomainBlacklistCache::new(store.clone(), Duration::from_secs(60), 100);

        assert!(cache.is_blacklisted("spam.tk").await.unwrap());
        assert!(!cache.is_blacklisted("clean.org").await.unwrap());
        assert_eq!(store.call_count(), 2);

        // second lookup of the same domains should be served from cache
        assert!(cache.is_blacklisted("spam.tk").await.unwrap());
        assert_eq!(store.call_count(), 2);
    }

    #[tokio::test]
    async fn batch_check_resolves_all_domains() {
        let store = Arc::new(MockStore::with_blacklisted(["spam.tk"]));
        let cache = DomainBlacklistCache::new(store, Duration::from_secs(60), 100);

        let results = cache
            .check_batch(&["spam.tk".to_string(), "clean.org".to_string()])
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
    }
}
