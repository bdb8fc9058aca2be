//! The `discovery_session` table: one row per `execute()` call on the
//! workflow orchestrator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionType {
    Manual,
    Scheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Running,
    Completed,
    Failed,
    Partial,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DiscoverySession {
    pub session_id: Uuid,
    pub session_type: SessionType,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub queries_generated: i64,
    pub results_fetched: i64,
    pub candidates_created: i64,
    pub candidates_skipped: i64,
    pub domains_blacklisted_hits: i64,
    pub errors_encountered: i64,
}

impl DiscoverySession {
    pub const COLUMNS: &'static str = "session_id, session_type, status, started_at, completed_at, \
         queries_generated, results_fetched, candidates_created, candidates_skipped, \
         domains_blacklisted_hits, errors_encountered";

    pub fn new(session_type: SessionType, started_at: DateTime<Utc>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            session_type,
            status: SessionStatus::Running,
            started_at,
            completed_at: None,
            queries_generated: 0,
            results_fetched: 0,
            candidates_created: 0,
            candidates_skipped: 0,
            domains_blacklisted_hits: 0,
            errors_encountered: 0,
        }
    }
}
