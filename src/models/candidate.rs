//! The `funding_source_candidate` table: one row per surviving search
//! result, the unit of work handed off to phase-2 crawling/review.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Phase-1 only produces the first two statuses; the rest belong to
/// phase-2 crawling and human review and are carried here so the column's
/// domain is stable across phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CandidateStatus {
    PendingCrawl,
    SkippedLowConfidence,
    Crawled,
    Enhanced,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct FundingSourceCandidate {
    pub candidate_id: Uuid,
    pub url: String,
    pub domain_name: String,
    pub title: String,
    pub description: String,
    pub search_engine_source: Option<String>,
    pub session_id: Uuid,
    /// Scale-2 decimal in `[0, 1]`.
    pub confidence_score: Decimal,
    pub status: CandidateStatus,
    pub discovered_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl FundingSourceCandidate {
    pub const COLUMNS: &'static str = "candidate_id, url, domain_name, title, description, \
         search_engine_source, session_id, confidence_score, status, discovered_at, created_at";
}
