/// One upload as received from the client. Lives only for the duration of a
/// single pipeline run.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub owner_id: String,
    pub original_filename: String,
    pub data: Vec<u8>,
}

/// Outcome of the translation stage as reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateStatus {
    Success,
    Failed,
}

impl TranslateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslateStatus::Success => "success",
            TranslateStatus::Failed => "failed",
        }
    }
}
