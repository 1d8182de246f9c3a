mod auth_gateway;
mod blob_store;
mod document_repository;
mod llm_client;
mod text_extractor;
mod translator;
mod workspace;

pub use auth_gateway::{AuthError, AuthGateway, AuthSession};
pub use blob_store::{BlobStore, BlobStoreError};
pub use document_repository::{DocumentRepository, RepositoryError};
pub use llm_client::{LlmClient, LlmClientError, ModelInfo};
pub use text_extractor::{ExtractorError, TextExtractor};
pub use translator::{Translator, TranslatorError};
pub use workspace::{WorkspaceError, WorkspaceManager};
