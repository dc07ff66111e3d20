//! Similarity client — the single point of entry for the external
//! sentence-similarity service.
//!
//! The provider seam is a trait so the orchestrator and its tests never
//! depend on the network. The production implementation talks to the
//! Hugging Face Inference API; one failed call terminates the request — no
//! retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;

const HF_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";

/// Default embedding model for sentence similarity.
pub const DEFAULT_EMBED_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";

// Hardening around the one network suspension point in the pipeline; the
// transport default is effectively unbounded.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Estimates semantic similarity between a reference text and one comparison
/// text, in [0, 1].
///
/// A well-formed but non-numeric payload yields `NaN` rather than an error;
/// the caller decides how to score that.
#[async_trait]
pub trait SimilarityProvider: Send + Sync {
    async fn similarity(&self, source: &str, other: &str) -> Result<f64, AppError>;
}

#[derive(Debug, Serialize)]
struct SimilarityRequest<'a> {
    inputs: SimilarityInputs<'a>,
}

#[derive(Debug, Serialize)]
struct SimilarityInputs<'a> {
    source_sentence: &'a str,
    sentences: Vec<&'a str>,
}

/// Hugging Face Inference API client for sentence similarity.
#[derive(Clone)]
pub struct HfSimilarityClient {
    client: Client,
    api_key: String,
    model: String,
}

impl HfSimilarityClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl SimilarityProvider for HfSimilarityClient {
    async fn similarity(&self, source: &str, other: &str) -> Result<f64, AppError> {
        let body = SimilarityRequest {
            inputs: SimilarityInputs {
                source_sentence: source,
                sentences: vec![other],
            },
        };

        let response = self
            .client
            .post(format!("{HF_INFERENCE_URL}/{}", self.model))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: text,
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| AppError::Upstream {
                status: status.as_u16(),
                message: format!("unparseable similarity payload: {e}"),
            })?;

        let sim = parse_similarity(&value);
        debug!(%status, sim, "similarity estimate received");
        Ok(sim)
    }
}

// The service answers `[0.83]` for a single comparison sentence; a bare
// scalar is accepted too. Anything else maps to NaN.
fn parse_similarity(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Array(items) => items
            .first()
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(f64::NAN),
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_similarity_from_singleton_array() {
        assert_eq!(parse_similarity(&json!([0.83])), 0.83);
    }

    #[test]
    fn test_parse_similarity_from_bare_scalar() {
        assert_eq!(parse_similarity(&json!(0.5)), 0.5);
    }

    #[test]
    fn test_parse_similarity_empty_array_is_nan() {
        assert!(parse_similarity(&json!([])).is_nan());
    }

    #[test]
    fn test_parse_similarity_non_numeric_is_nan() {
        assert!(parse_similarity(&json!({"error": "loading"})).is_nan());
        assert!(parse_similarity(&json!(["0.83"])).is_nan());
        assert!(parse_similarity(&json!(null)).is_nan());
    }

    #[test]
    fn test_request_body_shape() {
        let body = SimilarityRequest {
            inputs: SimilarityInputs {
                source_sentence: "resume",
                sentences: vec!["job"],
            },
        };
        let encoded = serde_json::to_value(&body).unwrap();
        assert_eq!(
            encoded,
            json!({"inputs": {"source_sentence": "resume", "sentences": ["job"]}})
        );
    }
}
