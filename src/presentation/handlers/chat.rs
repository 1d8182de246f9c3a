use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::ChatError;
use crate::domain::DocumentId;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub file_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = match request.message {
        Some(m) if !m.is_empty() => m,
        _ => return Err(ApiError::Validation("message is missing".to_string())),
    };
    let file_id = match request.file_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ApiError::Validation("file id is missing".to_string())),
    };

    // An unparsable id can never match a record.
    let document_id = DocumentId::parse(&file_id)
        .ok_or_else(|| ApiError::NotFound("file not found".to_string()))?;

    let answer = state
        .chat_service
        .answer(document_id, &message)
        .await
        .map_err(|e| match e {
            ChatError::NotFound => ApiError::NotFound("file not found".to_string()),
            ChatError::Repository(err) => ApiError::Internal(err.to_string()),
        })?;

    Ok(Json(ChatResponse { response: answer }))
}
