use chrono::{DateTime, Utc};

use super::{BlobRef, DocumentId, SummaryBundle};

/// Cap applied to the extracted text before it is persisted.
pub const STORED_TEXT_MAX_CHARS: usize = 5000;

/// A persisted document row: blob references plus the AI-derived artifacts.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub owner_id: String,
    pub original_title: String,
    pub translated_title: String,
    pub original: BlobRef,
    pub translated: Option<BlobRef>,
    pub summary: String,
    pub explanation: Vec<String>,
    pub extracted_text: String,
    pub created_at: DateTime<Utc>,
}

/// Everything the pipeline hands to the repository for insertion.
#[derive(Debug, Clone)]
pub struct NewDocumentRecord {
    pub owner_id: String,
    pub original_title: String,
    pub translated_title: String,
    pub original: BlobRef,
    pub translated: Option<BlobRef>,
    pub summary: SummaryBundle,
    pub extracted_text: String,
}

impl NewDocumentRecord {
    /// Derives the translated title: suffixed only when translation actually
    /// produced a stored blob, otherwise identical to the original title.
    pub fn translated_title_for(original_title: &str, translated: bool) -> String {
        if translated {
            format!("{} (Korean translation)", original_title)
        } else {
            original_title.to_string()
        }
    }
}
