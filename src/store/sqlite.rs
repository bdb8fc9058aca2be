//! SQLite-backed [`super::Store`], using explicit column lists per
//! [`crate::models`] — never `SELECT *`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{
    Domain, DomainStatus, DiscoverySession, FundingSourceCandidate, SearchQuery,
    SearchSessionStatistics, SessionStatus,
};

use super::Store;

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn is_domain_blacklisted(&self, domain_name: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(bool,)> =
            sqlx::query_as("SELECT blacklisted FROM domain WHERE name = ?")
                .bind(domain_name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(b,)| b).unwrap_or(false))
    }

    async fn get_domain_by_name(&self, domain_name: &str) -> Result<Option<Domain>, sqlx::Error> {
        let query = format!("SELECT {} FROM domain WHERE name = ?", Domain::COLUMNS);
        sqlx::query_as::<_, Domain>(&query).bind(domain_name).fetch_optional(&self.pool).await
    }

    async fn upsert_domain(&self, domain: &Domain) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO domain (domain_id, name, status, blacklisted, blacklist_reason, \
             first_discovered_session_id, first_discovered_at, quality_score, times_processed, \
             candidates_created) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(name) DO NOTHING",
        )
        .bind(domain.domain_id)
        .bind(&domain.name)
        .bind(domain.status)
        .bind(domain.blacklisted)
        .bind(&domain.blacklist_reason)
        .bind(domain.first_discovered_session_id)
        .bind(domain.first_discovered_at)
        .bind(domain.quality_score)
        .bind(domain.times_processed)
        .bind(domain.candidates_created)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn mark_domain_processed(
        &self,
        domain_name: &str,
        candidates_created_delta: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE domain SET times_processed = times_processed + 1, \
             candidates_created = candidates_created + ? WHERE name = ?",
        )
        .bind(candidates_created_delta)
        .bind(domain_name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_domain_status(
        &self,
        domain_name: &str,
        status: DomainStatus,
        blacklisted: bool,
        blacklist_reason: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE domain SET status = ?, blacklisted = ?, blacklist_reason = ? WHERE name = ?",
        )
        .bind(status)
        .bind(blacklisted)
        .bind(blacklist_reason)
        .bind(domain_name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_candidate(&self, candidate: &FundingSourceCandidate) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO funding_source_candidate (candidate_id, url, domain_name, title, \
             description, search_engine_source, session_id, confidence_score, status, \
             discovered_at, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(candidate.candidate_id)
        .bind(&candidate.url)
        .bind(&candidate.domain_name)
        .bind(&candidate.title)
        .bind(&candidate.description)
        .bind(&candidate.search_engine_source)
        .bind(candidate.session_id)
        .bind(candidate.confidence_score)
        .bind(candidate.status)
        .bind(candidate.discovered_at)
        .bind(candidate.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_session(&self, session: &DiscoverySession) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO discovery_session (session_id, session_type, status, started_at, \
             completed_at, queries_generated, results_fetched, candidates_created, \
             candidates_skipped, domains_blacklisted_hits, errors_encountered) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(session.session_id)
        .bind(session.session_type)
        .bind(session.status)
        .bind(session.started_at)
        .bind(session.completed_at)
        .bind(session.queries_generated)
        .bind(session.results_fetched)
        .bind(session.candidates_created)
        .bind(session.candidates_skipped)
        .bind(session.domains_blacklisted_hits)
        .bind(session.errors_encountered)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_session_status(
        &self,
        session_id: Uuid,
        status: SessionStatus,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE discovery_session SET status = ?, completed_at = ? WHERE session_id = ?")
            .bind(status)
            .bind(completed_at)
            .bind(session_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_session_counters(&self, session: &DiscoverySession) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE discovery_session SET queries_generated = ?, results_fetched = ?, \
             candidates_created = ?, candidates_skipped = ?, domains_blacklisted_hits = ?, \
             errors_encountered = ? WHERE session_id = ?",
        )
        .bind(session.queries_generated)
        .bind(session.results_fetched)
        .bind(session.candidates_created)
        .bind(session.candidates_skipped)
        .bind(session.domains_blacklisted_hits)
        .bind(session.errors_encountered)
        .bind(session.session_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_search_query(&self, query: &SearchQuery) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO search_query (query_id, session_id, query_text, search_engine, tags, \
             generation_method, ai_model, generated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(query.query_id)
        .bind(query.session_id)
        .bind(&query.query_text)
        .bind(query.search_engine)
        .bind(&query.tags)
        .bind(query.generation_method)
        .bind(&query.ai_model)
        .bind(query.generated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert_search_stats(
        &self,
        stats: &SearchSessionStatistics,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO search_session_statistics (stat_id, session_id, search_engine, \
             query_text, results_count, zero_result, duration_millis, error, recorded_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(stats.stat_id)
        .bind(stats.session_id)
        .bind(stats.search_engine)
        .bind(&stats.query_text)
        .bind(stats.results_count)
        .bind(stats.zero_result)
        .bind(stats.duration_millis)
        .bind(&stats.error)
        .bind(stats.recorded_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
