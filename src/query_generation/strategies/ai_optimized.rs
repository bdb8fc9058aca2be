//! AI-optimized strategy: long (12-40 word) natural-language queries for
//! TAVILY/PERPLEXICA, which rank on semantic relevance rather than exact
//! keyword overlap.

use std::collections::BTreeSet;

use crate::taxonomy::{
    FundingSearchCategory, GeographicScope, category_to_conceptual_description,
    scope_to_conceptual_description,
};

use super::{QueryStrategy, split_llm_lines};

pub struct AiOptimizedStrategy;

impl QueryStrategy for AiOptimizedStrategy {
    fn build_prompt(categories: &BTreeSet<FundingSearchCategory>, scope: GeographicScope) -> String {
        let description = categories
            .iter()
            .map(|c| category_to_conceptual_description(*c))
            .collect::<Vec<_>>()
            .join("; ");
        format!(
            "Write 3 detailed, natural-language search queries (12 to 40 words each) to discover \
             {description} with a geographic focus on {}. Each query should read like a question a \
             researcher would type into a semantic search engine. One query per line, no numbering.",
            scope_to_conceptual_description(scope),
        )
    }

    fn fallback_queries(
        categories: &BTreeSet<FundingSearchCategory>,
        scope: GeographicScope,
        _max_queries: usize,
    ) -> Vec<String> {
        let scope_phrase = scope_to_conceptual_description(scope);
        categories
            .iter()
            .map(|category| {
                let description = category_to_conceptual_description(*category);
                format!(
                    "What organizations and government agencies currently offer {description} for \
                     {scope_phrase} and what are the eligibility requirements and application \
                     deadlines for applicants?"
                )
            })
            .collect()
    }

    fn parse_llm_response(raw: &str, max_queries: usize) -> Vec<String> {
        split_llm_lines(raw)
            .into_iter()
            .inspect(|q| {
                let word_count = q.split_whitespace().count();
                if !(12..=40).contains(&word_count) {
                    tracing::warn!(query = %q, word_count, "AI-optimized query outside 12-40 word range");
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
    fn fallback_is_within_length_bounds() {
        let queries = AiOptimizedStrategy::fallback_queries(
            &categories(FundingSearchCategory::ClimateAdaptation),
            GeographicScope::WesternBalkans,
            3,
        );
        assert_eq!(queries.len(), 1);
        let word_count = queries[0].split_whitespace().count();
        assert!(word_count >= 12, "fallback query too short: {word_count} words");
    }

    #[test]
    fn fallback_one_query_per_category() {
        let mut categories = categories(FundingSearchCategory::ClimateAdaptation);
        categories.insert(FundingSearchCategory::RenewableEnergy);
        let queries =
            AiOptimizedStrategy::fallback_queries(&categories, GeographicScope::Global, 5);
        assert_eq!(queries.len(), 2);
    }
}
