mod chat_service;
mod summary_service;
mod upload_pipeline;

pub use chat_service::{ChatError, ChatService, CHAT_TEXT_MAX_CHARS};
pub use summary_service::{SummaryService, SUMMARY_INPUT_MAX_CHARS};
pub use upload_pipeline::{PipelineError, UploadOutcome, UploadPipeline};
