use std::sync::Arc;

use crate::application::ports::{DocumentRepository, LlmClient, RepositoryError};
use crate::domain::{truncate_chars, DocumentId};

/// Cap on how much stored text is embedded into the chat prompt.
pub const CHAT_TEXT_MAX_CHARS: usize = 30000;

/// Substituted when the stored record carries no extracted text.
const NO_CONTENT_SENTINEL: &str = "no content";

/// Failures the handler maps to HTTP statuses. Provider failures are not
/// listed: those come back as a user-facing answer string instead.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("document not found")]
    NotFound,
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

/// Answers follow-up questions over a previously uploaded document's
/// extracted text.
pub struct ChatService {
    llm: Arc<dyn LlmClient>,
    documents: Arc<dyn DocumentRepository>,
    fallback_model: String,
}

impl ChatService {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        documents: Arc<dyn DocumentRepository>,
        fallback_model: String,
    ) -> Self {
        Self {
            llm,
            documents,
            fallback_model,
        }
    }

    #[tracing::instrument(skip(self, question), fields(document_id = %document_id))]
    pub async fn answer(
        &self,
        document_id: DocumentId,
        question: &str,
    ) -> Result<String, ChatError> {
        let record = self
            .documents
            .get_by_id(document_id)
            .await?
            .ok_or(ChatError::NotFound)?;

        let document_text = if record.extracted_text.is_empty() {
            NO_CONTENT_SENTINEL
        } else {
            truncate_chars(&record.extracted_text, CHAT_TEXT_MAX_CHARS)
        };

        let model = self.resolve_model().await;
        let prompt = compose_prompt(document_text, question);

        match self.llm.generate(&model, &prompt).await {
            Ok(answer) => Ok(answer),
            Err(e) => {
                tracing::error!(error = %e, "chat completion failed");
                Ok(format!("An error occurred while answering: {e}"))
            }
        }
    }

    /// Picks the first generation-capable model whose name matches the
    /// provider's naming convention; falls back to the configured default
    /// when the listing fails or matches nothing.
    async fn resolve_model(&self) -> String {
        match self.llm.list_models().await {
            Ok(models) => models
                .into_iter()
                .find(|m| m.supports_generation && m.name.contains("gemini"))
                .map(|m| m.name)
                .unwrap_or_else(|| self.fallback_model.clone()),
            Err(e) => {
                tracing::warn!(error = %e, "model listing failed, using fallback model");
                self.fallback_model.clone()
            }
        }
    }
}

fn compose_prompt(document_text: &str, question: &str) -> String {
    format!(
        "[Document]\n{document_text}\n\n[Instruction]\nAnswer the question \
below in Korean, based only on the document above.\n\n[Question]\n{question}"
    )
}
