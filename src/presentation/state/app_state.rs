use std::sync::Arc;

use crate::application::ports::{AuthGateway, BlobStore, DocumentRepository};
use crate::application::services::{ChatService, UploadPipeline};

/// Process-wide service handles, built once in `main` and injected here so
/// tests can swap every collaborator for a fake.
#[derive(Clone)]
pub struct AppState {
    pub upload_pipeline: Arc<UploadPipeline>,
    pub chat_service: Arc<ChatService>,
    pub auth_gateway: Arc<dyn AuthGateway>,
    pub document_repository: Arc<dyn DocumentRepository>,
    pub blob_store: Arc<dyn BlobStore>,
}
