use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{DocumentRepository, RepositoryError};
use crate::domain::{BlobRef, DocumentId, DocumentRecord, NewDocumentRecord};

pub struct PgDocumentRepository {
    pool: PgPool,
}

impl PgDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Runtime queries rather than the compile-time checked macros: the crate has
// to build without a reachable database.
#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    #[instrument(skip(self, record), fields(owner_id = %record.owner_id))]
    async fn insert(&self, record: &NewDocumentRecord) -> Result<DocumentId, RepositoryError> {
        let id = DocumentId::new();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO documents (
                id, owner_id, original_title, translated_title,
                original_path, original_url, translated_path, translated_url,
                summary, explanation, extracted_text, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&record.owner_id)
        .bind(&record.original_title)
        .bind(&record.translated_title)
        .bind(&record.original.path)
        .bind(&record.original.public_url)
        .bind(record.translated.as_ref().map(|b| b.path.as_str()))
        .bind(record.translated.as_ref().map(|b| b.public_url.as_str()))
        .bind(&record.summary.summary)
        .bind(&record.summary.explanation)
        .bind(&record.extracted_text)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(id)
    }

    #[instrument(skip(self), fields(document_id = %id))]
    async fn get_by_id(&self, id: DocumentId) -> Result<Option<DocumentRecord>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, original_title, translated_title,
                   original_path, original_url, translated_path, translated_url,
                   summary, explanation, extracted_text, created_at
            FROM documents
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(row_to_record).transpose()
    }

    #[instrument(skip(self), fields(document_id = %id))]
    async fn get_by_id_and_owner(
        &self,
        id: DocumentId,
        owner_id: &str,
    ) -> Result<Option<DocumentRecord>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, original_title, translated_title,
                   original_path, original_url, translated_path, translated_url,
                   summary, explanation, extracted_text, created_at
            FROM documents
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.map(row_to_record).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<DocumentRecord>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, original_title, translated_title,
                   original_path, original_url, translated_path, translated_url,
                   summary, explanation, extracted_text, created_at
            FROM documents
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.into_iter().map(row_to_record).collect()
    }

    #[instrument(skip(self), fields(document_id = %id))]
    async fn delete(&self, id: DocumentId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}

fn row_to_record(row: PgRow) -> Result<DocumentRecord, RepositoryError> {
    let map_err = |e: sqlx::Error| RepositoryError::QueryFailed(e.to_string());

    let id: Uuid = row.try_get("id").map_err(map_err)?;
    let translated_path: Option<String> = row.try_get("translated_path").map_err(map_err)?;
    let translated_url: Option<String> = row.try_get("translated_url").map_err(map_err)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_err)?;

    let translated = match (translated_path, translated_url) {
        (Some(path), Some(url)) => Some(BlobRef::new(path, url)),
        _ => None,
    };

    Ok(DocumentRecord {
        id: DocumentId::from_uuid(id),
        owner_id: row.try_get("owner_id").map_err(map_err)?,
        original_title: row.try_get("original_title").map_err(map_err)?,
        translated_title: row.try_get("translated_title").map_err(map_err)?,
        original: BlobRef::new(
            row.try_get::<String, _>("original_path").map_err(map_err)?,
            row.try_get::<String, _>("original_url").map_err(map_err)?,
        ),
        translated,
        summary: row.try_get("summary").map_err(map_err)?,
        explanation: row.try_get("explanation").map_err(map_err)?,
        extracted_text: row.try_get("extracted_text").map_err(map_err)?,
        created_at,
    })
}
