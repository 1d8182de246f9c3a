use std::path::Path;

use async_trait::async_trait;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Best-effort text extraction from a document on disk. Implementations
    /// bound how much they read; callers treat any error as "no text".
    async fn extract(&self, path: &Path) -> Result<String, ExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("failed to parse document: {0}")]
    ParseFailed(String),
    #[error("extraction timed out")]
    TimedOut,
}
