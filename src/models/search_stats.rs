//! The `search_session_statistics` table: one row per (session, engine,
//! query) adapter call the orchestrator makes, win or lose.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::taxonomy::SearchEngineType;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SearchSessionStatistics {
    pub stat_id: Uuid,
    pub session_id: Uuid,
    pub search_engine: SearchEngineType,
    pub query_text: String,
    pub results_count: i64,
    pub zero_result: bool,
    pub duration_millis: i64,
    pub error: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl SearchSessionStatistics {
    pub const COLUMNS: &'static str = "stat_id, session_id, search_engine, query_text, \
         results_count, zero_result, duration_millis, error, recorded_at";
}
