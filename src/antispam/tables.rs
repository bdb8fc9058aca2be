//! Static tables the filter rules match against, kept as data rather than
//! inline match arms so the keyword/TLD lists can grow independently of the
//! rules that use them.

use once_cell::sync::Lazy;

/// Terms that legitimately co-occur with funding content; a title or
/// description saturated in these without any other content is a signal of
/// keyword stuffing, not of a rich result.
pub static FUNDING_KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "grant", "grants", "funding", "fund", "scholarship", "fellowship", "award", "donor",
        "foundation", "nonprofit", "philanthropy", "endowment", "subsidy", "sponsorship",
    ]
});

/// Common English function words; their near-absence alongside dense
/// keyword repetition is the "unnatural keyword list" signal.
pub static FUNCTION_WORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "the", "a", "an", "and", "or", "of", "to", "in", "for", "with", "on", "is", "are", "by",
        "at", "from",
    ]
});

/// TLDs and substrings strongly associated with scam or link-farm domains.
pub static SPAM_TLD_DENYLIST: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec![".tk", ".ml", ".ga", ".cf", ".gq", ".xyz", ".top", ".click", ".loan"]);

/// Substrings in a domain that on their own flag cross-category scam
/// patterns, regardless of TLD (e.g. "casinowinners.com").
pub static SCAM_SUBSTRINGS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec!["casino", "forex", "crypto-signals", "weight-loss", "winbig", "free-money"]
});
