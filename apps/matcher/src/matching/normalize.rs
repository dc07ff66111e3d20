//! Text normalizer: lowercasing, punctuation reduction, and canonical degree
//! tokens (`bachelor`, `master`, `phd`).
//!
//! The cascade is a data-driven, ordered list of (pattern, replacement)
//! pairs. Later rules operate on the output of earlier ones, so the order is
//! part of the contract: once the `master of science` phrase rule has fired,
//! the bare `ms` rule no longer sees anything to replace there.

use once_cell::sync::Lazy;
use regex::Regex;

static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // parentheses break abbreviations like "(PhD)" if left in place
        (r"[()]", " "),
        // doctorate variants
        (r"\bph\.?\s*d\b", " phd "),
        (r"\bdoctorate\b", " phd "),
        (r"\bdoctoral\b", " phd "),
        // bachelor variants
        (r"\bbachelor'?s\b", " bachelor "),
        (r"\bbachelors\b", " bachelor "),
        (r"\bbachelor of (science|engineering|technology|arts)\b", " bachelor "),
        (r"\bbs\.?\b", " bachelor "),
        (r"\bbsc\b", " bachelor "),
        (r"\bbe\b", " bachelor "),
        (r"\bb\.?\s*tech\b", " bachelor "),
        (r"\bbtech\b", " bachelor "),
        // master variants
        (r"\bmaster'?s\b", " master "),
        (r"\bmasters\b", " master "),
        (r"\bmaster of (science|engineering|technology|arts)\b", " master "),
        (r"\bms\b", " master "),
        (r"\bm\.?\s*s\.?\b", " master "),
        (r"\bmsc\b", " master "),
        (r"\bm\.?\s*tech\b", " master "),
        (r"\bmtech\b", " master "),
        // word-final possessives keep their plural form for the lemmatizer
        (r"['’]s\b", "s"),
        // everything outside the word-ish character set becomes a space
        (r"[^a-z0-9+\-_.\s]", " "),
        (r"\s+", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("static normalize rule"), replacement)
    })
    .collect()
});

/// Applies the full cascade and returns a trimmed, single-spaced string.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_lowercase();
    for (pattern, replacement) in RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    text.trim().to_string()
}
