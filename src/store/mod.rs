//! Primary store abstraction: domains, sessions, candidates, search queries,
//! and search statistics behind one `async_trait`, so the orchestrator and
//! caches can be tested against an in-memory fake instead of a real SQLite
//! file.

mod sqlite;

#[cfg(test)]
mod mock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{
    Domain, DomainStatus, DiscoverySession, FundingSourceCandidate, SearchQuery,
    SearchSessionStatistics, SessionStatus,
};

pub use sqlite::SqliteStore;

#[cfg(test)]
pub use mock::MockStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// `Ok(false)` for "no row found" as well as "row found, not
    /// blacklisted" — only a transport/query failure returns `Err`.
    async fn is_domain_blacklisted(&self, domain_name: &str) -> Result<bool, sqlx::Error>;

    async fn get_domain_by_name(&self, domain_name: &str) -> Result<Option<Domain>, sqlx::Error>;

    async fn upsert_domain(&self, domain: &Domain) -> Result<(), sqlx::Error>;

    async fn mark_domain_processed(
        &self,
        domain_name: &str,
        candidates_created_delta: i64,
    ) -> Result<(), sqlx::Error>;

    async fn update_domain_status(
        &self,
        domain_name: &str,
        status: DomainStatus,
        blacklisted: bool,
        blacklist_reason: Option<&str>,
    ) -> Result<(), sqlx::Error>;

    async fn insert_candidate(&self, candidate: &FundingSourceCandidate) -> Result<(), sqlx::Error>;

    async fn insert_session(&self, session: &DiscoverySession) -> Result<(), sqlx::Error>;

    async fn update_session_status(
        &self,
        session_id: Uuid,
        status: SessionStatus,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<(), sqlx::Error>;

    async fn update_session_counters(&self, session: &DiscoverySession) -> Result<(), sqlx::Error>;

    /// Fire-and-forget from the caller's perspective: failures here
    /// are logged by the caller, never propagated into the query-generation
    /// response.
    async fn insert_search_query(&self, query: &SearchQuery) -> Result<(), sqlx::Error>;

    async fn insert_search_stats(
        &self,
        stats: &SearchSessionStatistics,
    ) -> Result<(), sqlx::Error>;
}
