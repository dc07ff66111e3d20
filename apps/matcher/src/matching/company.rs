//! Heuristic company-name detection over raw job-description text.
//!
//! Runs before any lowercasing or truncation: the capitalization of the name
//! stem is the signal. Detected stems feed the per-request stop-set so a
//! posting's own company name never shows up as a "missing keyword".

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Capitalized stem (≥3 chars of letters/digits/&/./-) followed by a legal
// entity suffix. The suffix alternation matches its literal casing only:
// "LABS" or "inc" will not match.
static COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b([A-Z][A-Za-z0-9&.\-]{2,})\s+(?:Labs?|Lab|Inc\.?|LLC|Ltd\.?|Corporation|Corp\.?|GmbH|PLC|Pte\.?|LLP)\b",
    )
    .expect("static company pattern")
});

/// Extracts lowercase organization-name stems from raw text.
///
/// All non-overlapping occurrences are collected; the legal suffix itself is
/// discarded. Empty input yields an empty set.
pub fn detect_company_tokens(raw: &str) -> HashSet<String> {
    COMPANY_RE
        .captures_iter(raw)
        .map(|caps| caps[1].to_lowercase())
        .collect()
}
