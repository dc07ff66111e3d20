// Resume ↔ job-description matching.
// The keyword pipeline is pure, deterministic computation; the one await
// point is the external similarity estimate. All state is request-scoped
// apart from the read-only lexicons.

pub mod company;
pub mod lexicon;
pub mod normalize;
pub mod rank;
pub mod tokenize;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::similarity::SimilarityProvider;

use self::company::detect_company_tokens;
use self::rank::{frequencies, top_n};
use self::tokenize::{tokenize_to_lemmas, TokenizeOptions};

/// Input caps, applied silently by character count.
pub const MAX_RESUME_CHARS: usize = 12_000;
pub const MAX_JOB_CHARS: usize = 6_000;

/// Ranking depth per text and the cap on each reported keyword list.
const TOP_KEYWORDS: usize = 150;
const REPORTED_KEYWORDS: usize = 25;

/// The match report returned to callers. Request-scoped, never persisted;
/// field names stay camelCase on the wire for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub score: u32,
    pub overlap_pct: u32,
    pub used_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Scores a resume against a job description: semantic similarity from the
/// external provider plus keyword overlap from the local pipeline.
///
/// Both texts are mandatory. Company-name stems detected in the unmodified
/// job text are suppressed on the job side only, so a posting's own company
/// never contaminates the keyword lists.
pub async fn score(
    provider: &dyn SimilarityProvider,
    resume_text: &str,
    job_text: &str,
) -> Result<MatchReport, AppError> {
    let resume = resume_text.trim();
    let job = job_text.trim();
    if resume.is_empty() {
        return Err(AppError::Validation("missing resume text".to_string()));
    }
    if job.is_empty() {
        return Err(AppError::Validation("missing job text".to_string()));
    }

    // Detection needs the raw capitalization, so it runs on the unmodified
    // input before any lowercasing or truncation.
    let company_stops = detect_company_tokens(job_text);
    if !company_stops.is_empty() {
        debug!(?company_stops, "suppressing company tokens for this request");
    }

    let resume = truncate_chars(resume, MAX_RESUME_CHARS);
    let job = truncate_chars(job, MAX_JOB_CHARS);

    let sim = provider.similarity(resume, job).await?;
    let score = if sim.is_finite() {
        (sim * 100.0).round() as u32
    } else {
        0
    };

    let resume_lemmas = tokenize_to_lemmas(resume, &TokenizeOptions::default());
    let job_opts = TokenizeOptions {
        extra_stop: company_stops,
        ..TokenizeOptions::default()
    };
    let job_lemmas = tokenize_to_lemmas(job, &job_opts);

    let resume_top: HashSet<String> = top_n(&frequencies(&resume_lemmas), TOP_KEYWORDS)
        .into_iter()
        .collect();
    let job_top = top_n(&frequencies(&job_lemmas), TOP_KEYWORDS);

    let used_keywords: Vec<String> = job_top
        .iter()
        .filter(|kw| resume_top.contains(*kw))
        .take(REPORTED_KEYWORDS)
        .cloned()
        .collect();
    let missing_keywords: Vec<String> = job_top
        .iter()
        .filter(|kw| !resume_top.contains(*kw))
        .take(REPORTED_KEYWORDS)
        .cloned()
        .collect();

    let overlap_pct = if job_top.is_empty() {
        0
    } else {
        ((used_keywords.len() as f64 / job_top.len() as f64) * 100.0).round() as u32
    };

    debug!(
        score,
        overlap_pct,
        used = used_keywords.len(),
        missing = missing_keywords.len(),
        "match report computed"
    );

    Ok(MatchReport {
        score,
        overlap_pct,
        used_keywords,
        missing_keywords,
    })
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
