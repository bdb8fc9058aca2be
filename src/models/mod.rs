//! Persistent entities: one module per table, each exposing a
//! `sqlx::FromRow` struct with an explicit column list — never `SELECT *`.

pub mod candidate;
pub mod domain;
pub mod search_query;
pub mod search_stats;
pub mod session;

pub use candidate::{CandidateStatus, FundingSourceCandidate};
pub use domain::{Domain, DomainStatus};
pub use search_query::{GenerationMethod, SearchQuery};
pub use search_stats::SearchSessionStatistics;
pub use session::{DiscoverySession, SessionStatus, SessionType};
