use async_trait::async_trait;

use crate::domain::BlobRef;

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Uploads `bytes` under `path` in the configured bucket and returns the
    /// blob reference with its public URL.
    async fn upload(
        &self,
        path: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<BlobRef, BlobStoreError>;

    /// Public URL for a path, without touching the network.
    fn public_url(&self, path: &str) -> String;

    /// Best-effort removal; only the delete flow calls this.
    async fn remove(&self, paths: &[String]) -> Result<(), BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
