//! Resume text extraction.
//!
//! Turns uploaded PDF bytes into one plain-text string: every page's text in
//! page order, outer whitespace trimmed. Layout and font information is dropped.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("{0}")]
    Pdf(String),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),
}

/// Extracts the text of every page of an in-memory PDF.
///
/// The parsed document lives only inside this call and is dropped on every
/// return path. Any parse or per-page failure fails the whole extraction.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let text = join_pages(&pages);
    debug!(
        "Extracted {} chars from {} page(s)",
        text.chars().count(),
        pages.len()
    );
    Ok(text)
}

/// Concatenates page texts in order with no separator and trims the result.
pub fn join_pages(pages: &[String]) -> String {
    pages.concat().trim().to_string()
}

/// Runs [`extract_text`] on the blocking pool.
///
/// PDF parsing is CPU-bound, and the parser panics on some malformed inputs;
/// the join handle turns such a panic into an `ExtractionError`.
pub async fn extract_upload(bytes: Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| ExtractionError::Aborted(e.to_string()))?
}
