use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DocumentId, DocumentRecord};
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub id: String,
    pub owner_id: String,
    pub original_title: String,
    pub translated_title: String,
    pub original_url: String,
    pub translated_url: Option<String>,
    pub summary: String,
    pub explanation: Vec<String>,
    pub extracted_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<DocumentRecord> for DocumentDto {
    fn from(record: DocumentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            owner_id: record.owner_id,
            original_title: record.original_title,
            translated_title: record.translated_title,
            original_url: record.original.public_url,
            translated_url: record.translated.map(|b| b.public_url),
            summary: record.summary,
            explanation: record.explanation,
            extracted_text: record.extracted_text,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OwnedDocumentQuery {
    pub id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: String,
}

#[tracing::instrument(skip(state))]
pub async fn view_documents_handler(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<DocumentDto>>, ApiError> {
    let user_id = query
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::Validation("user_id is required".to_string()))?;

    let records = state
        .document_repository
        .list_by_owner(&user_id)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(records.into_iter().map(DocumentDto::from).collect()))
}

#[tracing::instrument(skip(state))]
pub async fn view_my_document_handler(
    State(state): State<AppState>,
    Query(query): Query<OwnedDocumentQuery>,
) -> Result<Json<DocumentDto>, ApiError> {
    let (Some(id), Some(user_id)) = (query.id, query.user_id) else {
        return Err(ApiError::Validation(
            "id and user_id are required".to_string(),
        ));
    };

    let document_id =
        DocumentId::parse(&id).ok_or_else(|| ApiError::NotFound("file not found".to_string()))?;

    let record = state
        .document_repository
        .get_by_id_and_owner(document_id, &user_id)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound("file not found".to_string()))?;

    Ok(Json(DocumentDto::from(record)))
}

#[tracing::instrument(skip(state))]
pub async fn delete_document_handler(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let user_id = query
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::Validation("user_id is required".to_string()))?;

    let document_id = DocumentId::parse(&file_id)
        .ok_or_else(|| ApiError::NotFound("file not found".to_string()))?;

    let record = state
        .document_repository
        .get_by_id(document_id)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or_else(|| ApiError::NotFound("file not found".to_string()))?;

    if record.owner_id != user_id {
        return Err(ApiError::Forbidden(
            "you do not have permission to delete this file".to_string(),
        ));
    }

    // Blob paths come from the record itself, never re-derived from URLs.
    let mut paths = vec![record.original.path.clone()];
    if let Some(translated) = &record.translated {
        paths.push(translated.path.clone());
    }

    // Best effort: a straggling blob must not block record deletion.
    if let Err(e) = state.blob_store.remove(&paths).await {
        tracing::warn!(error = %e, "blob removal failed, deleting record anyway");
    }

    state
        .document_repository
        .delete(document_id)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(document_id = %document_id, "document deleted");

    Ok(Json(DeleteResponse {
        message: "deleted".to_string(),
        id: file_id,
    }))
}
