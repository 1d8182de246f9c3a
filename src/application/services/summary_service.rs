use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::domain::{truncate_chars, SummaryBundle, EXPLANATION_FALLBACK, SUMMARY_FALLBACK};

/// Cap on how much extracted text is handed to the LLM per call.
pub const SUMMARY_INPUT_MAX_CHARS: usize = 3000;

/// Substituted when extraction produced nothing.
const NO_CONTENT_SENTINEL: &str = "no content";

const SUMMARY_PROMPT: &str = "Read the document below and summarize the key \
points of every chapter (introduction, conclusion, and so on). Format the \
output as readable Markdown using headers (#), bullet points (-), and bold \
(**) where appropriate, and write it in Korean. Never open with an \
acknowledgement sentence.\n\nDocument:\n";

const EXPLANATION_PROMPT: &str = "Read the document below and explain it in \
plain language so it is easy to follow, spelling out any difficult terms. \
Format the output as readable Markdown using headers (#), bullet points (-), \
and bold (**) where appropriate, and write it in Korean. Never open with an \
acknowledgement sentence.\n\nDocument:\n";

/// Two independent LLM calls over the same extracted text. Each call is
/// fault-isolated: a failure degrades that field to its fixed placeholder
/// without affecting the other call or the pipeline.
pub struct SummaryService {
    llm: Arc<dyn LlmClient>,
    model: String,
}

impl SummaryService {
    pub fn new(llm: Arc<dyn LlmClient>, model: String) -> Self {
        Self { llm, model }
    }

    #[tracing::instrument(skip(self, extracted_text), fields(chars = extracted_text.len()))]
    pub async fn summarize_and_explain(&self, extracted_text: &str) -> SummaryBundle {
        let input = if extracted_text.is_empty() {
            NO_CONTENT_SENTINEL
        } else {
            truncate_chars(extracted_text, SUMMARY_INPUT_MAX_CHARS)
        };

        let (summary, explanation) = tokio::join!(self.summarize(input), self.explain(input));
        SummaryBundle {
            summary,
            explanation,
        }
    }

    async fn summarize(&self, input: &str) -> String {
        let prompt = format!("{SUMMARY_PROMPT}{input}");
        match self.llm.generate(&self.model, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "summary generation failed, using fallback");
                SUMMARY_FALLBACK.to_string()
            }
        }
    }

    async fn explain(&self, input: &str) -> Vec<String> {
        let prompt = format!("{EXPLANATION_PROMPT}{input}");
        match self.llm.generate(&self.model, &prompt).await {
            Ok(text) => vec![text],
            Err(e) => {
                tracing::warn!(error = %e, "explanation generation failed, using fallback");
                vec![EXPLANATION_FALLBACK.to_string()]
            }
        }
    }
}
