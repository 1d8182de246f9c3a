mod blob_ref;
mod document;
mod document_id;
mod summary;
mod text;
mod upload;
mod workspace;

pub use blob_ref::BlobRef;
pub use document::{DocumentRecord, NewDocumentRecord, STORED_TEXT_MAX_CHARS};
pub use document_id::DocumentId;
pub use summary::{SummaryBundle, EXPLANATION_FALLBACK, SUMMARY_FALLBACK};
pub use text::{sanitize_for_storage, truncate_chars};
pub use upload::{TranslateStatus, UploadRequest};
pub use workspace::WorkingFileSet;
