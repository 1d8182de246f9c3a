use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::BlobRef;

/// Supabase storage REST adapter. Uploads land under the configured bucket
/// and are served back through the public-object URL.
pub struct SupabaseBlobStore {
    client: Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

#[derive(Serialize)]
struct RemoveRequest<'a> {
    prefixes: &'a [String],
}

impl SupabaseBlobStore {
    pub fn new(base_url: String, service_key: String, bucket: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            bucket,
        }
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}

#[async_trait]
impl BlobStore for SupabaseBlobStore {
    #[tracing::instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    async fn upload(
        &self,
        path: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<BlobRef, BlobStoreError> {
        let response = self
            .client
            .post(self.object_url(path))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BlobStoreError::UploadFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        Ok(BlobRef::new(path, self.public_url(path)))
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    #[tracing::instrument(skip(self), fields(count = paths.len()))]
    async fn remove(&self, paths: &[String]) -> Result<(), BlobStoreError> {
        if paths.is_empty() {
            return Ok(());
        }

        let response = self
            .client
            .delete(format!("{}/storage/v1/object/{}", self.base_url, self.bucket))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(&RemoveRequest { prefixes: paths })
            .send()
            .await
            .map_err(|e| BlobStoreError::DeleteFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BlobStoreError::DeleteFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}
