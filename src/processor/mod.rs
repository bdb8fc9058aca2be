//! Search-result processor: per-session pipeline turning raw search
//! results into persisted candidates. Sequential by design — `seen_domains`
//! is per-[`ProcessingContext`], never shared across sessions, so there is
//! no need for synchronization inside a single session's run.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use url::Url;
use uuid::Uuid;

use crate::antispam::AntiSpamFilter;
use crate::blacklist::DomainBlacklistCache;
use crate::models::{CandidateStatus, Domain, DomainStatus, FundingSourceCandidate};
use crate::scoring::{ConfidenceScorer, ScoringInput};
use crate::search::SearchResult;
use crate::store::Store;
use crate::taxonomy::GeographicScope;

/// Default confidence threshold separating `PENDING_CRAWL` from
/// `SKIPPED_LOW_CONFIDENCE`. Overridable via [`crate::config::ProcessorConfig`].
pub const DEFAULT_CONFIDENCE_THRESHOLD: Decimal = Decimal::from_parts(60, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfidenceClass {
    High,
    Low,
}

/// Per-session state: seen domains (first-processed-wins dedup) and the six
/// counters whose sum must equal the number of results processed.
#[derive(Debug, Default, Clone)]
pub struct ProcessingStatistics {
    pub invalid_domain: u64,
    pub spam_filtered: u64,
    pub duplicate: u64,
    pub blacklisted: u64,
    pub high_confidence: u64,
    pub low_confidence: u64,
}

impl ProcessingStatistics {
    pub fn total(&self) -> u64 {
        self.invalid_domain
            + self.spam_filtered
            + self.duplicate
            + self.blacklisted
            + self.high_confidence
            + self.low_confidence
    }
}

pub struct ProcessingContext {
    session_id: Uuid,
    geographic_scope: Option<GeographicScope>,
    confidence_threshold: Decimal,
    seen_domains: HashSet<String>,
    stats: ProcessingStatistics,
}

impl ProcessingContext {
    pub fn new(
        session_id: Uuid,
        geographic_scope: Option<GeographicScope>,
        confidence_threshold: Decimal,
    ) -> Self {
        Self {
            session_id,
            geographic_scope,
            confidence_threshold,
            seen_domains: HashSet::new(),
            stats: ProcessingStatistics::default(),
        }
    }

    pub fn stats(&self) -> &ProcessingStatistics {
        &self.stats
    }
}

pub struct SearchResultProcessor {
    blacklist: Arc<DomainBlacklistCache>,
    store: Arc<dyn Store>,
}

impl SearchResultProcessor {
    pub fn new(blacklist: Arc<DomainBlacklistCache>, store: Arc<dyn Store>) -> Self {
        Self { blacklist, store }
    }

    /// Run every result in `results` through the 7-stage pipeline,
    /// mutating `context` as it goes. Invariant: after this call,
    /// `context.stats().total() == results.len()`.
    pub async fn process(
        &self,
        context: &mut ProcessingContext,
        results: Vec<(SearchResult, Option<String>)>,
    ) {
        for (result, source_engine) in results {
            self.process_one(context, result, source_engine).await;
        }
    }

    async fn process_one(
        &self,
        context: &mut ProcessingContext,
        result: SearchResult,
        source_engine: Option<String>,
    ) {
        // Stage 1: extract and validate domain.
        let Some(domain_name) = extract_domain(&result.url) else {
            context.stats.invalid_domain += 1;
            return;
        };

        // Stage 2: stateless spam rules (not database-backed TLD denylist;
        // that lives in stage 4 via the blacklist cache).
        if AntiSpamFilter::classify(&domain_name, &result.title, &result.description).is_some() {
            context.stats.spam_filtered += 1;
            return;
        }

        // Stage 3: duplicate within this session (first processed wins).
        if context.seen_domains.contains(&domain_name) {
            context.stats.duplicate += 1;
            return;
        }

        // Stage 4: persisted blacklist. A cache/store outage surfaces as an
        // error and is conservatively treated as blacklisted, never as
        // silently clean.
        let is_blacklisted = self.blacklist.is_blacklisted(&domain_name).await.unwrap_or(true);
        if is_blacklisted {
            context.seen_domains.insert(domain_name.clone());
            context.stats.blacklisted += 1;

            let now = Utc::now();
            let domain = Domain {
                domain_id: Uuid::new_v4(),
                name: domain_name.clone(),
                status: DomainStatus::Blacklisted,
                blacklisted: true,
                blacklist_reason: None,
                first_discovered_session_id: context.session_id,
                first_discovered_at: now,
                quality_score: None,
                times_processed: 0,
                candidates_created: 0,
            };
            if let Err(err) = self.store.upsert_domain(&domain).await {
                tracing::error!(error = %err, domain = %domain_name, "failed to upsert domain");
            }
            return;
        }

        context.seen_domains.insert(domain_name.clone());

        // Stage 5: confidence scoring.
        let score = ConfidenceScorer::score(&ScoringInput {
            domain: &domain_name,
            title: &result.title,
            description: &result.description,
            geographic_scope: context.geographic_scope,
        });

        // Stage 6: classify.
        let class = if score >= context.confidence_threshold {
            ConfidenceClass::High
        } else {
            ConfidenceClass::Low
        };

        // Stage 7: persist, for both classes.
        let now = Utc::now();
        let domain = Domain {
            domain_id: Uuid::new_v4(),
            name: domain_name.clone(),
            status: match class {
                ConfidenceClass::High => DomainStatus::ProcessedHighQuality,
                ConfidenceClass::Low => DomainStatus::ProcessedLowQuality,
            },
            blacklisted: false,
            blacklist_reason: None,
            first_discovered_session_id: context.session_id,
            first_discovered_at: now,
            quality_score: Some(score),
            times_processed: 0,
            candidates_created: 0,
        };
        if let Err(err) = self.store.upsert_domain(&domain).await {
            tracing::error!(error = %err, domain = %domain_name, "failed to upsert domain");
        }
        if let Err(err) = self.store.mark_domain_processed(&domain_name, 1).await {
            tracing::error!(error = %err, domain = %domain_name, "failed to update domain counters");
        }

        let candidate = FundingSourceCandidate {
            candidate_id: Uuid::new_v4(),
            url: result.url,
            domain_name,
            title: result.title,
            description: result.description,
            search_engine_source: source_engine,
            session_id: context.session_id,
            confidence_score: score,
            status: match class {
                ConfidenceClass::High => CandidateStatus::PendingCrawl,
                ConfidenceClass::Low => CandidateStatus::SkippedLowConfidence,
            },
            discovered_at: now,
            created_at: now,
        };

        if let Err(err) = self.store.insert_candidate(&candidate).await {
            tracing::error!(error = %err, "failed to persist candidate");
        }

        match class {
            ConfidenceClass::High => context.stats.high_confidence += 1,
            ConfidenceClass::Low => context.stats.low_confidence += 1,
        }
    }
}

/// Parse a URL and return its lowercase, `www.`-stripped host, or `None` if
/// the URL doesn't have one (stage 1 of the pipeline).
fn extract_domain(raw_url: &str) -> Option<String> {
    let url = Url::parse(raw_url).ok()?;
    let host = url.host_str()?;
    Some(Domain::normalize_name(host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    fn result(url: &str, title: &str, description: &str) -> SearchResult {
        SearchResult { url: url.to_string(), title: title.to_string(), description: description.to_string() }
    }

    #[tokio::test]
    async fn counters_sum_to_input_length() {
        let store = Arc::new(MockStore::with_blacklisted(["blacklisted.org"]));
        let blacklist = Arc::new(DomainBlacklistCache::new(
            store.clone(),
            std::time::Duration::from_secs(60),
            100,
        ));
        let processor = SearchResultProcessor::new(blacklist, store.clone());

        let mut context =
            ProcessingContext::new(Uuid::new_v4(), None, DEFAULT_CONFIDENCE_THRESHOLD);

        let results = vec![
            (result("not a url", "bad", "bad"), Some("brave".to_string())),
            (
                result(
                    "https://grants.example.gov/funding",
                    "Example Grant Program",
                    "apply for funding, scholarship, fellowship grants",
                ),
                Some("brave".to_string()),
            ),
            (
                result("https://grants.example.gov/funding2", "dup", "dup"),
                Some("brave".to_string()),
            ),
            (
                result("https://blacklisted.org/page", "Blacklisted", "blacklisted"),
                Some("brave".to_string()),
            ),
            (
                result("https://randomblog.com/post", "My Day", "just rambling about my day"),
                Some("brave".to_string()),
            ),
        ];
        let len = results.len() as u64;

        processor.process(&mut context, results).await;

        assert_eq!(context.stats().total(), len);
        assert_eq!(context.stats().invalid_domain, 1);
        assert_eq!(context.stats().duplicate, 1);
        assert_eq!(context.stats().blacklisted, 1);
        assert_eq!(store.candidates().len(), 2);
    }
}
