/// Location of an uploaded blob: the path inside the storage bucket plus the
/// public URL handed back to clients. The path is persisted alongside the URL
/// so deletion never has to re-derive it from the URL shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobRef {
    pub path: String,
    pub public_url: String,
}

impl BlobRef {
    pub fn new(path: impl Into<String>, public_url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            public_url: public_url.into(),
        }
    }
}
