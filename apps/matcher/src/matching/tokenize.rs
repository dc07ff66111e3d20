//! Tokenizer and rule-based lemmatizer.
//!
//! Deliberately not a real NLP stack: a handful of ordered suffix rules and
//! an exception list give a deterministic, reproducible reduction that is
//! good enough for keyword overlap. Malformed or empty tokens are dropped
//! silently; that is the design, not an error path.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::matching::lexicon::{ALLOWED_TWO_LETTER, PLURAL_EXCEPTIONS, STOPWORDS};
use crate::matching::normalize::normalize;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z][a-z0-9+\-_.]+").expect("static token pattern"));

/// Per-call tokenization options. `extra_stop` suppresses tokens for this
/// call only; `force_keep` exempts tokens from every stop check.
#[derive(Debug, Default, Clone)]
pub struct TokenizeOptions {
    pub extra_stop: HashSet<String>,
    pub force_keep: HashSet<String>,
}

impl TokenizeOptions {
    fn is_stopped(&self, token: &str) -> bool {
        (STOPWORDS.contains(token) || self.extra_stop.contains(token))
            && !self.force_keep.contains(token)
    }
}

/// Normalizes `text` and reduces it to an ordered lemma sequence, duplicates
/// retained. Stop checks run twice per token: once on the raw token and once
/// on its post-lemma form, since lemmatization can turn a kept token into a
/// stopword (e.g. `uses` → `us`).
pub fn tokenize_to_lemmas(text: &str, opts: &TokenizeOptions) -> Vec<String> {
    let cleaned = normalize(text);
    let mut lemmas = Vec::new();

    for m in TOKEN_RE.find_iter(&cleaned) {
        // "inc." → "inc", "co-design." → "co-design"
        let token = m.as_str().trim_matches(|c| matches!(c, '.' | '_' | '-'));
        if token.is_empty() {
            continue;
        }
        if token.len() == 2 && !ALLOWED_TWO_LETTER.contains(token) {
            continue;
        }
        if opts.is_stopped(token) {
            continue;
        }

        let token = remap_degree(token);
        let lemma = to_lemma(token);
        if opts.is_stopped(&lemma) {
            continue;
        }
        lemmas.push(lemma);
    }

    lemmas
}

// The normalizer should already have rewritten these; kept as a token-level
// backstop for variants that reach this stage unconverted.
fn remap_degree(token: &str) -> &str {
    match token {
        "bs" | "bsc" | "be" | "btech" => "bachelor",
        "ms" | "msc" | "mtech" => "master",
        "phd" | "doctoral" | "doctorate" => "phd",
        _ => token,
    }
}

/// Reduces one token to its lemma: strips a trailing possessive, then applies
/// the first matching suffix rule unless the token is a plural exception.
pub fn to_lemma(word: &str) -> String {
    let s = word.strip_suffix("'s").unwrap_or(word);
    if PLURAL_EXCEPTIONS.contains(s) {
        return s.to_string();
    }
    let n = s.len();
    if n > 4 && s.ends_with("ies") {
        return format!("{}y", &s[..n - 3]);
    }
    if n > 4 && (s.ends_with("ses") || s.ends_with("xes")) {
        return s[..n - 2].to_string();
    }
    if n > 3 && s.ends_with("es") {
        return s[..n - 2].to_string();
    }
    if n > 3 && s.ends_with('s') {
        return s[..n - 1].to_string();
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmas(text: &str) -> Vec<String> {
        tokenize_to_lemmas(text, &TokenizeOptions::default())
    }

    #[test]
    fn test_plural_exceptions_keep_trailing_s() {
        assert_eq!(lemmas("Experienced with Kubernetes and AWS"), vec![
            "experienced",
            "kubernetes",
            "aws"
        ]);
    }

    #[test]
    fn test_suffix_rules_reduce_plurals() {
        assert_eq!(to_lemma("dependencies"), "dependency");
        assert_eq!(to_lemma("libraries"), "library");
        assert_eq!(to_lemma("classes"), "class");
        assert_eq!(to_lemma("boxes"), "box");
        assert_eq!(to_lemma("pipelines"), "pipelin");
        assert_eq!(to_lemma("apis"), "api");
    }

    #[test]
    fn test_to_lemma_strips_trailing_possessive() {
        assert_eq!(to_lemma("manager's"), "manager");
    }

    #[test]
    fn test_two_letter_tokens_filtered_by_allowlist() {
        assert_eq!(lemmas("ai ux hr go ml qa"), vec!["ai", "ux", "go", "ml"]);
    }

    #[test]
    fn test_stopwords_dropped() {
        assert_eq!(lemmas("the engineer and the pipeline"), vec![
            "engineer", "pipeline"
        ]);
    }

    #[test]
    fn test_post_lemma_stopword_recheck() {
        // "uses" passes the raw check, lemmatizes to "us", then gets dropped
        assert!(lemmas("uses").is_empty());
    }

    #[test]
    fn test_extra_stop_suppresses_for_this_call_only() {
        let opts = TokenizeOptions {
            extra_stop: ["acme".to_string()].into_iter().collect(),
            ..TokenizeOptions::default()
        };
        assert_eq!(tokenize_to_lemmas("acme python", &opts), vec!["python"]);
        assert_eq!(lemmas("acme python"), vec!["acme", "python"]);
    }

    #[test]
    fn test_force_keep_exempts_stopword() {
        let opts = TokenizeOptions {
            force_keep: ["experience".to_string()].into_iter().collect(),
            ..TokenizeOptions::default()
        };
        assert_eq!(tokenize_to_lemmas("experience with python", &opts), vec![
            "experience",
            "python"
        ]);
    }

    #[test]
    fn test_trailing_punctuation_stripped_from_tokens() {
        assert_eq!(lemmas("golang. co-design."), vec!["golang", "co-design"]);
    }

    #[test]
    fn test_degree_tokens_survive_as_canonical_forms() {
        // "in" and "cs" fall to the two-letter filter, "preferred" is a stopword
        assert_eq!(lemmas("MS in CS, B.Tech preferred"), vec!["master", "bachelor"]);
    }

    #[test]
    fn test_duplicates_retained_in_order() {
        assert_eq!(lemmas("python java python"), vec!["python", "java", "python"]);
    }

    #[test]
    fn test_single_char_and_numeric_runs_never_tokenize() {
        assert!(lemmas("5 + 7 x").is_empty());
    }
}
