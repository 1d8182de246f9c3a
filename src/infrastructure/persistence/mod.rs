mod pg_document_repository;
mod pg_pool;

pub use pg_document_repository::PgDocumentRepository;
pub use pg_pool::create_pool;
