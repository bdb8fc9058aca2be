//! The `search_query` table: an append-only audit trail of every query the
//! pipeline has ever issued or served from cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::taxonomy::SearchEngineType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationMethod {
    Ai,
    Fallback,
    Cached,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query_id: Uuid,
    pub session_id: Uuid,
    pub query_text: String,
    pub search_engine: SearchEngineType,
    /// Stored as a JSON array; the DB column is `TEXT`.
    pub tags: sqlx::types::Json<Vec<String>>,
    pub generation_method: GenerationMethod,
    pub ai_model: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl SearchQuery {
    pub const COLUMNS: &'static str =
        "query_id, session_id, query_text, search_engine, tags, generation_method, ai_model, generated_at";
}
