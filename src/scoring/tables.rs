//! Weighted signal tables for the confidence scorer, kept as data rather
//! than inline match arms so the keyword/TLD/geographic lists can grow
//! without touching the scoring logic itself.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::HashMap;

pub static FUNDING_KEYWORD_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "grant", "grants", "funding", "fund", "scholarship", "fellowship", "award", "donor",
        "foundation", "nonprofit", "philanthropy", "endowment", "subsidy", "sponsorship",
        "apply", "application", "deadline", "eligible", "eligibility",
    ]
});

/// TLD credibility weights; anything not listed falls back to `DEFAULT_TLD_WEIGHT`.
pub static TLD_WEIGHTS: Lazy<HashMap<&'static str, Decimal>> = Lazy::new(|| {
    HashMap::from([
        (".gov", Decimal::new(100, 2)),
        (".edu", Decimal::new(100, 2)),
        (".edu.", Decimal::new(100, 2)),
        (".ac.", Decimal::new(100, 2)),
        ("europa.eu", Decimal::new(100, 2)),
        (".org", Decimal::new(70, 2)),
    ])
});

pub static DEFAULT_TLD_WEIGHT: Lazy<Decimal> = Lazy::new(|| Decimal::new(30, 2));

pub static GEOGRAPHIC_INDICATORS: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        ("bulgaria", vec!["bulgaria", "bulgarian", "sofia", ".bg"]),
        ("eastern_europe", vec!["eastern europe", "balkan", "central europe"]),
        ("western_balkans", vec!["western balkans", "serbia", "kosovo", "albania", "bosnia"]),
        ("eu", vec!["european union", "eu member", "europa.eu", "brussels"]),
        ("central_asia", vec!["central asia", "kazakhstan", "uzbekistan", "kyrgyzstan"]),
    ])
});

pub static ORG_TYPE_PATTERNS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "foundation", "ministry", "agency", "university", "ngo", "association", "institute",
        "bank", "trust",
    ]
});
