//! Keyword strategy: short (3-8 word) queries for BRAVE/SERPER/SEARXNG.

use std::collections::BTreeSet;

use crate::taxonomy::{
    FundingSearchCategory, GeographicScope, category_to_keywords, scope_to_keywords,
};

use super::{QueryStrategy, split_llm_lines};

pub struct KeywordStrategy;

impl QueryStrategy for KeywordStrategy {
    fn build_prompt(categories: &BTreeSet<FundingSearchCategory>, scope: GeographicScope) -> String {
        let category_phrase = categories
            .iter()
            .filter_map(|c| category_to_keywords(*c).first().copied())
            .collect::<Vec<_>>()
            .join(", ");
        let scope_term = scope_to_keywords(scope).first().copied().unwrap_or("the region");
        format!(
            "Generate 5 short web search queries (3 to 8 words each) to find grant or funding \
             opportunities related to \"{category_phrase}\" in {scope_term}. One query per line, \
             no numbering, no explanation."
        )
    }

    fn fallback_queries(
        categories: &BTreeSet<FundingSearchCategory>,
        scope: GeographicScope,
        max_queries: usize,
    ) -> Vec<String> {
        let scope_terms = scope_to_keywords(scope);
        let mut queries = Vec::new();
        for category in categories {
            for term in category_to_keywords(*category) {
                for scope_term in scope_terms {
                    queries.push(format!("{term} {scope_term}"));
                }
            }
        }
        queries.truncate(max_queries.max(1));
        queries
    }

    fn parse_llm_response(raw: &str, max_queries: usize) -> Vec<String> {
        split_llm_lines(raw)
            .into_iter()
            .inspect(|q| {
                let word_count = q.split_whitespace().count();
                if !(3..=8).contains(&word_count) {
                    tracing::warn!(query = %q, word_count, "keyword query outside 3-8 word range");
                }
            })
            .take(max_queries)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(cat: FundingSearchCategory) -> BTreeSet<FundingSearchCategory> {
        [cat].into_iter().collect()
    }

    #[test]
    fn fallback_never_empty() {
        let queries = KeywordStrategy::fallback_queries(
            &categories(FundingSearchCategory::RuralDevelopment),
            GeographicScope::Bulgaria,
            8,
        );
        assert!(!queries.is_empty());
    }

    #[test]
    fn fallback_is_non_empty_for_global_scope() {
        let queries = KeywordStrategy::fallback_queries(
            &categories(FundingSearchCategory::RuralDevelopment),
            GeographicScope::Global,
            8,
        );
        assert!(!queries.is_empty());
    }

    #[test]
    fn parse_keeps_out_of_range_lengths_but_warns() {
        let raw = "grant\nrural development grant program for small towns this year\nhealth grant funding";
        let parsed = KeywordStrategy::parse_llm_response(raw, 10);
        assert_eq!(
            parsed,
            vec![
                "grant",
                "rural development grant program for small towns this year",
                "health grant funding",
            ]
        );
    }
}
