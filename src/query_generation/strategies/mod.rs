//! Query-generation strategies: a tagged choice keyed by
//! [`SearchEngineType`] rather than a trait-object registry, since the
//! split is exactly two-way and fixed.

pub mod ai_optimized;
pub mod keyword;

use std::collections::BTreeSet;

use crate::taxonomy::{FundingSearchCategory, GeographicScope};

/// Build the LLM prompt and the deterministic fallback for a given engine.
/// Picking the right module is a plain match on `engine.is_keyword_engine()`
/// in [`super::service`]; this trait just keeps each strategy's prompt and
/// fallback logic next to each other.
pub trait QueryStrategy {
    fn build_prompt(categories: &BTreeSet<FundingSearchCategory>, scope: GeographicScope) -> String;

    fn fallback_queries(
        categories: &BTreeSet<FundingSearchCategory>,
        scope: GeographicScope,
        max_queries: usize,
    ) -> Vec<String>;

    fn parse_llm_response(raw: &str, max_queries: usize) -> Vec<String>;
}

pub use ai_optimized::AiOptimizedStrategy;
pub use keyword::KeywordStrategy;

/// Engines differ on the desired query length but not on how a raw LLM
/// response becomes a query list — both strategies split the response on
/// lines and drop anything that doesn't look like a query.
pub(super) fn split_llm_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == '-' || c == ')')
                .trim()
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
