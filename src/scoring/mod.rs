//! Confidence scorer: four weighted signals combined into a
//! deterministic scale-2 decimal in `[0, 1]`, rounded half-up. No network
//! calls, no randomness — same inputs always produce the same score.

pub mod tables;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::taxonomy::GeographicScope;
use self::tables::{DEFAULT_TLD_WEIGHT, FUNDING_KEYWORD_TERMS, GEOGRAPHIC_INDICATORS, ORG_TYPE_PATTERNS, TLD_WEIGHTS};

pub const FUNDING_KEYWORD_WEIGHT: Decimal = Decimal::from_parts(30, 0, 0, false, 2);
pub const DOMAIN_CREDIBILITY_WEIGHT: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
pub const GEOGRAPHIC_RELEVANCE_WEIGHT: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
pub const ORG_TYPE_WEIGHT: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

pub struct ScoringInput<'a> {
    pub domain: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub geographic_scope: Option<GeographicScope>,
}

pub struct ConfidenceScorer;

impl ConfidenceScorer {
    /// Score one result. Every branch here is total over its inputs, so
    /// this never fails; malformed input just scores low rather than
    /// erroring.
    pub fn score(input: &ScoringInput<'_>) -> Decimal {
        let text = format!("{} {}", input.title, input.description).to_lowercase();

        let funding = Self::funding_keyword_signal(&text) * FUNDING_KEYWORD_WEIGHT;
        let credibility = Self::domain_credibility_signal(input.domain) * DOMAIN_CREDIBILITY_WEIGHT;
        let geographic = Self::geographic_relevance_signal(&text, input.geographic_scope)
            * GEOGRAPHIC_RELEVANCE_WEIGHT;
        let org_type = Self::org_type_signal(&text) * ORG_TYPE_WEIGHT;

        let total = funding + credibility + geographic + org_type;
        total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Fraction of funding-keyword terms present, capped at 1.0 once three
    /// distinct terms appear.
    fn funding_keyword_signal(text: &str) -> Decimal {
        let hits = FUNDING_KEYWORD_TERMS.iter().filter(|term| text.contains(*term)).count();
        Self::ratio_capped(hits, 3)
    }

    fn domain_credibility_signal(domain: &str) -> Decimal {
        let lower = domain.to_lowercase();
        for (suffix, weight) in TLD_WEIGHTS.iter() {
            if lower.ends_with(suffix) || lower.contains(suffix) {
                return *weight;
            }
        }
        *DEFAULT_TLD_WEIGHT
    }

    fn geographic_relevance_signal(text: &str, scope: Option<GeographicScope>) -> Decimal {
        let Some(scope) = scope else {
            return Decimal::new(50, 2);
        };
        if scope == GeographicScope::Global {
            return Decimal::ONE;
        }
        let key = match scope {
            GeographicScope::Bulgaria => "bulgaria",
            GeographicScope::EasternEurope => "eastern_europe",
            GeographicScope::WesternBalkans | GeographicScope::Balkans => "western_balkans",
            GeographicScope::EuMemberStates => "eu",
            GeographicScope::CentralAsia => "central_asia",
            GeographicScope::Global => unreachable!(),
        };
        let indicators = GEOGRAPHIC_INDICATORS.get(key).map(Vec::as_slice).unwrap_or(&[]);
        if indicators.iter().any(|ind| text.contains(ind)) { Decimal::ONE } else { Decimal::new(20, 2) }
    }

    fn org_type_signal(text: &str) -> Decimal {
        let hits = ORG_TYPE_PATTERNS.iter().filter(|pattern| text.contains(*pattern)).count();
        Self::ratio_capped(hits, 2)
    }

    fn ratio_capped(hits: usize, cap: usize) -> Decimal {
        if hits == 0 {
            return Decimal::ZERO;
        }
        let ratio = Decimal::new(hits.min(cap) as i64, 0) / Decimal::new(cap as i64, 0);
        ratio.min(Decimal::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gov_domain_with_funding_language_scores_high() {
        let input = ScoringInput {
            domain: "grants.ec.europa.eu",
            title: "EU Grant Program for Rural Development",
            description: "Apply for funding to support rural development foundations.",
            geographic_scope: Some(GeographicScope::EuMemberStates),
        };
        let score = ConfidenceScorer::score(&input);
        assert!(score >= Decimal::new(60, 2), "expected >= 0.60, got {score}");
        assert_eq!(score.scale(), 2);
    }

    #[test]
    fn generic_com_domain_with_no_signals_scores_low() {
        let input = ScoringInput {
            domain: "randomblog.com",
            title: "My Vacation Photos",
            description: "Here are some pictures from my trip.",
            geographic_scope: None,
        };
        let score = ConfidenceScorer::score(&input);
        assert!(score < Decimal::new(60, 2), "expected < 0.60, got {score}");
    }

    #[test]
    fn country_code_edu_and_ac_domains_score_top_credibility() {
        let scholarship = ScoringInput {
            domain: "scholarships.edu.bg",
            title: "Scholarships",
            description: "",
            geographic_scope: None,
        };
        let university = ScoringInput {
            domain: "university.ac.uk",
            title: "University",
            description: "",
            geographic_scope: None,
        };
        assert!(ConfidenceScorer::score(&scholarship) >= Decimal::new(25, 2));
        assert!(ConfidenceScorer::score(&university) >= Decimal::new(25, 2));
    }

    #[test]
    fn score_is_always_in_unit_interval() {
        let input = ScoringInput {
            domain: "foundation.gov",
            title: "grant funding scholarship fellowship award donor foundation",
            description: "foundation ministry agency university bulgaria sofia",
            geographic_scope: Some(GeographicScope::Bulgaria),
        };
        let score = ConfidenceScorer::score(&input);
        assert!(score >= Decimal::ZERO && score <= Decimal::ONE);
    }
}
