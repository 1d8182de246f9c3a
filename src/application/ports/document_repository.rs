use async_trait::async_trait;

use crate::domain::{DocumentId, DocumentRecord, NewDocumentRecord};

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn insert(&self, record: &NewDocumentRecord) -> Result<DocumentId, RepositoryError>;

    async fn get_by_id(&self, id: DocumentId) -> Result<Option<DocumentRecord>, RepositoryError>;

    async fn get_by_id_and_owner(
        &self,
        id: DocumentId,
        owner_id: &str,
    ) -> Result<Option<DocumentRecord>, RepositoryError>;

    /// All records for one owner, newest first.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<DocumentRecord>, RepositoryError>;

    async fn delete(&self, id: DocumentId) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
}
