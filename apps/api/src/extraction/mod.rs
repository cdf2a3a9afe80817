//! Turns an uploaded document into plain resume text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so handlers never depend on the
//! PDF backend directly. Extraction always finishes before scoring starts.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

const PDF_SIGNATURE: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document: {0}")]
    Unsupported(String),

    #[error("Malformed document: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, document: Bytes) -> Result<String, ExtractionError>;
}

/// PDF backend on top of `pdf-extract`. Parsing is CPU-bound, so it runs on the
/// blocking pool; a parser panic surfaces as `Malformed` instead of killing the task.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, document: Bytes) -> Result<String, ExtractionError> {
        if !document.starts_with(PDF_SIGNATURE) {
            return Err(ExtractionError::Unsupported(
                "missing %PDF- header".to_string(),
            ));
        }

        let size = document.len();
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&document))
            .await
            .map_err(|e| {
                warn!("PDF parser task failed: {e}");
                ExtractionError::Malformed("PDF parser aborted".to_string())
            })?
            .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

        debug!(bytes = size, chars = text.len(), "Extracted text from PDF");
        Ok(text)
    }
}
