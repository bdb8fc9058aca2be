//! In-memory [`Store`] fake used by unit tests across the crate (blacklist
//! cache, processor, workflow orchestrator).

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{
    Domain, DomainStatus, DiscoverySession, FundingSourceCandidate, SearchQuery,
    SearchSessionStatistics, SessionStatus,
};

use super::Store;

#[derive(Default)]
pub struct MockStore {
    blacklisted: HashSet<String>,
    domains: Mutex<HashMap<String, Domain>>,
    candidates: Mutex<Vec<FundingSourceCandidate>>,
    sessions: Mutex<HashMap<Uuid, DiscoverySession>>,
    queries: Mutex<Vec<SearchQuery>>,
    stats: Mutex<Vec<SearchSessionStatistics>>,
    calls: AtomicUsize,
}

impl MockStore {
    pub fn with_blacklisted<const N: usize>(domains: [&str; N]) -> Self {
        Self {
            blacklisted: domains.into_iter().map(str::to_string).collect(),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn candidates(&self) -> Vec<FundingSourceCandidate> {
        self.candidates.lock().unwrap().clone()
    }

    pub fn sessions(&self) -> HashMap<Uuid, DiscoverySession> {
        self.sessions.lock().unwrap().clone()
    }
}

#[async_trait]
impl Store for MockStore {
    async fn is_domain_blacklisted(&self, domain_name: &str) -> Result<bool, sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.blacklisted.contains(domain_name))
    }

    async fn get_domain_by_name(&self, domain_name: &str) -> Result<Option<Domain>, sqlx::Error> {
        Ok(self.domains.lock().unwrap().get(domain_name).cloned())
    }

    async fn upsert_domain(&self, domain: &Domain) -> Result<(), sqlx::Error> {
        self.domains.lock().unwrap().entry(domain.name.clone()).or_insert_with(|| domain.clone());
        Ok(())
    }

    async fn mark_domain_processed(
        &self,
        domain_name: &str,
        candidates_created_delta: i64,
    ) -> Result<(), sqlx::Error> {
        if let Some(domain) = self.domains.lock().unwrap().get_mut(domain_name) {
            domain.times_processed += 1;
            domain.candidates_created += candidates_created_delta;
        }
        Ok(())
    }

    async fn update_domain_status(
        &self,
        domain_name: &str,
        status: DomainStatus,
        blacklisted: bool,
        blacklist_reason: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        if let Some(domain) = self.domains.lock().unwrap().get_mut(domain_name) {
            domain.status = status;
            domain.blacklisted = blacklisted;
            domain.blacklist_reason = blacklist_reason.map(str::to_string);
        }
        Ok(())
    }

    async fn insert_candidate(&self, candidate: &FundingSourceCandidate) -> Result<(), sqlx::Error> {
        self.candidates.lock().unwrap().push(candidate.clone());
        Ok(())
    }

    async fn insert_session(&self, session: &DiscoverySession) -> Result<(), sqlx::Error> {
        self.sessions.lock().unwrap().insert(session.session_id, session.clone());
        Ok(())
    }

    async fn update_session_status(
        &self,
        session_id: Uuid,
        status: SessionStatus,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<(), sqlx::Error> {
        if let Some(session) = self.sessions.lock().unwrap().get_mut(&session_id) {
            session.status = status;
            session.completed_at = completed_at;
        }
        Ok(())
    }

    async fn update_session_counters(&self, session: &DiscoverySession) -> Result<(), sqlx::Error> {
        self.sessions.lock().unwrap().insert(session.session_id, session.clone());
        Ok(())
    }

    async fn insert_search_query(&self, query: &SearchQuery) -> Result<(), sqlx::Error> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(())
    }

    async fn insert_search_stats(
        &self,
        stats: &SearchSessionStatistics,
    ) -> Result<(), sqlx::Error> {
        self.stats.lock().unwrap().push(stats.clone());
        Ok(())
    }
}
