//! Best-effort PDF → plain-text extraction for uploaded resumes.
//!
//! Extraction failure is recoverable: the caller reports it and the request
//! fails validation downstream if no fallback text is supplied.

use tracing::warn;

use crate::errors::AppError;

/// Document size ceiling, matching the 4 MB transport limit.
pub const MAX_PDF_BYTES: usize = 4 * 1024 * 1024;

pub fn pdf_to_text(bytes: &[u8]) -> Result<String, AppError> {
    if bytes.len() > MAX_PDF_BYTES {
        return Err(AppError::Extraction(format!(
            "PDF is {} bytes; limit is {MAX_PDF_BYTES}",
            bytes.len()
        )));
    }

    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) => {
            warn!("PDF extraction failed: {e}");
            Err(AppError::Extraction(e.to_string()))
        }
    }
}
