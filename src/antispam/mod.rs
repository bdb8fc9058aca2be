//! Anti-spam filter: stateless, five ordered rules, no I/O. Each rule
//! is a fast reject; the first rule that fires short-circuits the rest.

pub mod tables;

use std::collections::HashSet;

use self::tables::{FUNCTION_WORDS, FUNDING_KEYWORDS, SCAM_SUBSTRINGS, SPAM_TLD_DENYLIST};

/// The rule that rejected a result, in evaluation order. `None` means the
/// result passed every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpamReason {
    KeywordStuffing,
    DomainTitleMismatch,
    UnnaturalKeywordList,
    ScamTldOrSubstring,
    SpamTld,
}

pub struct AntiSpamFilter;

impl AntiSpamFilter {
    /// `None` if the result passes all rules, `Some(reason)` for the first
    /// rule it fails.
    pub fn classify(domain: &str, title: &str, description: &str) -> Option<SpamReason> {
        if Self::is_keyword_stuffed(title, description) {
            return Some(SpamReason::KeywordStuffing);
        }
        if Self::is_domain_title_mismatch(domain, title) {
            return Some(SpamReason::DomainTitleMismatch);
        }
        if Self::is_unnatural_keyword_list(title, description) {
            return Some(SpamReason::UnnaturalKeywordList);
        }
        if Self::has_scam_tld_or_substring(domain) {
            return Some(SpamReason::ScamTldOrSubstring);
        }
        if Self::has_spam_tld(domain) {
            return Some(SpamReason::SpamTld);
        }
        None
    }

    /// Rule 1: a text with 6+ tokens but a unique-word ratio under 0.50 is
    /// repeating itself rather than describing something.
    fn is_keyword_stuffed(title: &str, description: &str) -> bool {
        let tokens = tokenize(&format!("{title} {description}"));
        if tokens.len() < 6 {
            return false;
        }
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        (unique.len() as f64 / tokens.len() as f64) < 0.50
    }

    /// Rule 2: the domain and title should share *some* vocabulary. Low
    /// cosine similarity between their token bags, with no shared funding
    /// keyword to explain the gap, suggests a spun or templated title.
    fn is_domain_title_mismatch(domain: &str, title: &str) -> bool {
        let domain_tokens: HashSet<String> = domain
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect();
        let title_tokens: HashSet<String> = tokenize(title).into_iter().collect();
        if domain_tokens.is_empty() || title_tokens.is_empty() {
            return false;
        }

        let similarity = cosine_similarity(&domain_tokens, &title_tokens);
        let shares_funding_keyword =
            title_tokens.iter().any(|t| FUNDING_KEYWORDS.iter().any(|k| k == t));

        similarity < 0.15 && !shares_funding_keyword
    }

    /// Rule 3: dense funding-keyword repetition with almost no function
    /// words reads as a keyword list, not a sentence.
    fn is_unnatural_keyword_list(title: &str, description: &str) -> bool {
        let tokens = tokenize(&format!("{title} {description}"));
        let function_word_count =
            tokens.iter().filter(|t| FUNCTION_WORDS.iter().any(|f| f == t)).count();
        let funding_term_count =
            tokens.iter().filter(|t| FUNDING_KEYWORDS.iter().any(|k| k == t)).count();

        function_word_count < 2 && funding_term_count >= 4
    }

    fn has_scam_tld_or_substring(domain: &str) -> bool {
        let lower = domain.to_lowercase();
        SCAM_SUBSTRINGS.iter().any(|s| lower.contains(s))
    }

    fn has_spam_tld(domain: &str) -> bool {
        let lower = domain.to_lowercase();
        SPAM_TLD_DENYLIST.iter().any(|tld| lower.ends_with(tld))
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

fn cosine_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count() as f64;
    let magnitude = (a.len() as f64).sqrt() * (b.len() as f64).sqrt();
    if magnitude == 0.0 { 0.0 } else { intersection / magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_result_passes_every_rule() {
        let result = AntiSpamFilter::classify(
            "example.org",
            "Example Foundation Grant Program",
            "The Example Foundation offers grants to support community health initiatives.",
        );
        assert_eq!(result, None);
    }

    #[test]
    fn repetitive_title_is_keyword_stuffed() {
        let result = AntiSpamFilter::classify(
            "spammy.xyz",
            "grant grant grant grant grant grant",
            "grant grant grant",
        );
        assert_eq!(result, Some(SpamReason::KeywordStuffing));
    }

    #[test]
    fn spam_tld_is_flagged_even_with_clean_title() {
        let result = AntiSpamFilter::classify(
            "community-health-fund.tk",
            "Community Health Fund",
            "Supporting rural clinics with direct grants.",
        );
        assert_eq!(result, Some(SpamReason::SpamTld));
    }

    #[test]
    fn scam_substring_with_spam_tld_flags_before_generic_tld_rule() {
        let result = AntiSpamFilter::classify(
            "crypto-signals-grants.tk",
            "Grant funding",
            "grant funding available now",
        );
        assert!(matches!(
            result,
            Some(SpamReason::ScamTldOrSubstring) | Some(SpamReason::KeywordStuffing)
        ));
    }

    #[test]
    fn scam_substring_on_ordinary_tld_is_flagged() {
        let result = AntiSpamFilter::classify(
            "casinowinners.com",
            "Claim your prize today",
            "Guaranteed cash rewards for lucky winners.",
        );
        assert_eq!(result, Some(SpamReason::ScamTldOrSubstring));
    }
}
