use std::sync::Arc;

use crate::application::ports::{
    BlobStore, BlobStoreError, DocumentRepository, RepositoryError, TextExtractor, Translator,
    TranslatorError, WorkspaceError, WorkspaceManager,
};
use crate::application::services::SummaryService;
use crate::domain::{
    sanitize_for_storage, truncate_chars, BlobRef, DocumentId, NewDocumentRecord, TranslateStatus,
    UploadRequest, WorkingFileSet, STORED_TEXT_MAX_CHARS,
};

/// Instruction handed to the translation runner alongside the document.
const TRANSLATION_PROMPT: &str = "Translate into Korean. Leave technical \
terms, code, and paper titles in the original language.";

#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub document_id: DocumentId,
    pub translate_status: TranslateStatus,
}

/// Errors that abort the pipeline. Everything else (extraction, summary,
/// translation, translated-blob upload) degrades in place and never shows up
/// here.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("workspace: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("failed to save uploaded file: {0}")]
    SaveInput(std::io::Error),
    #[error("original upload: {0}")]
    OriginalUpload(#[from] BlobStoreError),
    #[error("record insert: {0}")]
    RecordInsert(#[from] RepositoryError),
}

/// Sequences one upload end to end:
/// save input, extract, summarize, store original, translate (best effort),
/// store translation (best effort), persist the record.
///
/// The working file set is released on every exit path; its `Drop` covers
/// the early returns the fatal stages take.
pub struct UploadPipeline {
    workspace: Arc<dyn WorkspaceManager>,
    extractor: Arc<dyn TextExtractor>,
    summaries: Arc<SummaryService>,
    blob_store: Arc<dyn BlobStore>,
    translator: Arc<dyn Translator>,
    documents: Arc<dyn DocumentRepository>,
}

impl UploadPipeline {
    pub fn new(
        workspace: Arc<dyn WorkspaceManager>,
        extractor: Arc<dyn TextExtractor>,
        summaries: Arc<SummaryService>,
        blob_store: Arc<dyn BlobStore>,
        translator: Arc<dyn Translator>,
        documents: Arc<dyn DocumentRepository>,
    ) -> Self {
        Self {
            workspace,
            extractor,
            summaries,
            blob_store,
            translator,
            documents,
        }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(owner_id = %request.owner_id, filename = %request.original_filename)
    )]
    pub async fn run(&self, request: UploadRequest) -> Result<UploadOutcome, PipelineError> {
        let files = self.workspace.allocate()?;
        let result = self.run_stages(&request, &files).await;
        files.release();
        result
    }

    async fn run_stages(
        &self,
        request: &UploadRequest,
        files: &WorkingFileSet,
    ) -> Result<UploadOutcome, PipelineError> {
        // Fatal: nothing downstream works without the file on disk.
        tokio::fs::write(files.input_path(), &request.data)
            .await
            .map_err(PipelineError::SaveInput)?;
        tracing::debug!(path = %files.input_path().display(), "upload saved to scratch dir");

        // Recoverable: an unreadable PDF degrades to empty text.
        let extracted_text = match self.extractor.extract(files.input_path()).await {
            Ok(text) => {
                tracing::info!(chars = text.len(), "text extraction complete");
                text
            }
            Err(e) => {
                tracing::warn!(error = %e, "text extraction failed, continuing without text");
                String::new()
            }
        };

        // Recoverable per call; the service substitutes fallbacks itself.
        let summary = self.summaries.summarize_and_explain(&extracted_text).await;

        // Fatal: losing the original blob invalidates the whole request.
        let original_path = format!("originals/original_{}.pdf", files.unique_id());
        let original = self
            .blob_store
            .upload(&original_path, &request.data, "application/pdf")
            .await?;
        tracing::info!(path = %original.path, "original blob stored");

        let translated = self.translate_and_store(files).await;
        let translate_status = if translated.is_some() {
            TranslateStatus::Success
        } else {
            TranslateStatus::Failed
        };

        let record = NewDocumentRecord {
            owner_id: request.owner_id.clone(),
            original_title: request.original_filename.clone(),
            translated_title: NewDocumentRecord::translated_title_for(
                &request.original_filename,
                translated.is_some(),
            ),
            original,
            translated,
            summary,
            extracted_text: sanitize_for_storage(truncate_chars(
                &extracted_text,
                STORED_TEXT_MAX_CHARS,
            )),
        };

        // Fatal: without the record the client has no handle on the blobs.
        let document_id = self.documents.insert(&record).await?;
        tracing::info!(
            document_id = %document_id,
            translate_status = translate_status.as_str(),
            "upload pipeline complete"
        );

        Ok(UploadOutcome {
            document_id,
            translate_status,
        })
    }

    /// Runs translation and uploads its output. Every failure in here is
    /// recoverable: the record is still created with null translated fields.
    async fn translate_and_store(&self, files: &WorkingFileSet) -> Option<BlobRef> {
        let output_path = match self.translator.translate(files, TRANSLATION_PROMPT).await {
            Ok(path) => path,
            Err(TranslatorError::Skipped) => {
                tracing::info!("translation skipped: no api key configured");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "translation failed");
                return None;
            }
        };

        let bytes = match tokio::fs::read(&output_path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read translated output");
                return None;
            }
        };

        let blob_path = format!("translated/translated_{}.pdf", files.unique_id());
        match self
            .blob_store
            .upload(&blob_path, &bytes, "application/pdf")
            .await
        {
            Ok(blob) => {
                tracing::info!(path = %blob.path, "translated blob stored");
                Some(blob)
            }
            Err(e) => {
                tracing::warn!(error = %e, "translated blob upload failed");
                None
            }
        }
    }
}
