//! The `domain` table: one row per distinct hostname ever discovered,
//! regardless of how many candidates it has produced.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainStatus {
    Discovered,
    ProcessedHighQuality,
    ProcessedLowQuality,
    Blacklisted,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Domain {
    pub domain_id: Uuid,
    /// Lowercase, `www.`-stripped hostname. Unique.
    pub name: String,
    pub status: DomainStatus,
    pub blacklisted: bool,
    pub blacklist_reason: Option<String>,
    pub first_discovered_session_id: Uuid,
    pub first_discovered_at: DateTime<Utc>,
    pub quality_score: Option<Decimal>,
    pub times_processed: i64,
    pub candidates_created: i64,
}

impl Domain {
    pub const COLUMNS: &'static str = "domain_id, name, status, blacklisted, blacklist_reason, \
         first_discovered_session_id, first_discovered_at, quality_score, times_processed, \
         candidates_created";

    /// Normalize a raw hostname the way every caller that creates a new
    /// `Domain` row must: lowercase, `www.` stripped.
    pub fn normalize_name(raw: &str) -> String {
        let lower = raw.to_lowercase();
        lower.strip_prefix("www.").map(str::to_string).unwrap_or(lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_www_and_case() {
        assert_eq!(Domain::normalize_name("WWW.Example.ORG"), "example.org");
        assert_eq!(Domain::normalize_name("example.org"), "example.org");
    }
}
