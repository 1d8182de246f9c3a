use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::WorkingFileSet;

/// External translation capability. One attempt per request; every failure
/// mode is recoverable for the caller.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates the input PDF of `files`, guided by `prompt_text`, and
    /// returns the canonical output path on success.
    async fn translate(
        &self,
        files: &WorkingFileSet,
        prompt_text: &str,
    ) -> Result<PathBuf, TranslatorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    /// No API key configured; the runner never starts.
    #[error("translation skipped: api key missing")]
    Skipped,
    #[error("translation timed out after {0}s")]
    TimedOut(u64),
    #[error("translator exited with status {0}")]
    NonZeroExit(i32),
    /// The process reported success but no output matched the expected name.
    #[error("no translated output found")]
    OutputMissing,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
