use thiserror::Error;

/// Application-level error taxonomy.
///
/// Validation problems belong to the caller and are never retried. Upstream
/// and extraction failures carry enough context to name the collaborator
/// that produced them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Similarity service error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Document extraction error: {0}")]
    Extraction(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
