use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document;

use crate::application::ports::{ExtractorError, TextExtractor};

/// Reading stops once this many pages have been consumed.
pub const MAX_PAGES: usize = 5;

/// Reading stops once at least this many characters have accumulated.
pub const MAX_CHARS: usize = 4000;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Bounded PDF text extraction. Pages are read in order and concatenated;
/// both ceilings exist to cap memory and latency on large uploads.
#[derive(Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_bounded(path: &Path) -> Result<String, ExtractorError> {
        let doc = Document::load(path).map_err(|e| ExtractorError::ParseFailed(e.to_string()))?;

        let mut text = String::new();
        for (read, page_number) in doc.get_pages().keys().enumerate() {
            if read >= MAX_PAGES {
                break;
            }
            match doc.extract_text(&[*page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    tracing::debug!(page = *page_number, error = %e, "skipping unreadable page");
                }
            }
            if text.chars().count() > MAX_CHARS {
                break;
            }
        }

        Ok(text)
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    async fn extract(&self, path: &Path) -> Result<String, ExtractorError> {
        let path: PathBuf = path.to_path_buf();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_bounded(&path)),
        )
        .await
        .map_err(|_| ExtractorError::TimedOut)?
        .map_err(|e| ExtractorError::ParseFailed(format!("task join error: {e}")))??;

        tracing::info!(chars = text.len(), "PDF text extraction complete");
        Ok(text)
    }
}
