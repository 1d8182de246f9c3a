use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::domain::UploadRequest;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

/// Sentinel some clients send when their login state was lost.
const UNDEFINED_OWNER: &str = "undefined";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub file_id: String,
    pub translate_status: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;
    let mut user_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("failed to read multipart: {e}")))?
    {
        match field.name() {
            Some("file") => {
                filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(format!("failed to read file: {e}")))?;
                file_bytes = Some(bytes.to_vec());
            }
            Some("user_id") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Validation(format!("failed to read user_id: {e}")))?;
                user_id = Some(value);
            }
            _ => {}
        }
    }

    // Validation happens before any resource allocation.
    let Some(data) = file_bytes else {
        return Err(ApiError::Validation("no file was uploaded".to_string()));
    };
    let user_id = match user_id {
        Some(id) if !id.is_empty() && id != UNDEFINED_OWNER => id,
        _ => {
            return Err(ApiError::Validation(
                "login information (user id) is missing".to_string(),
            ));
        }
    };

    tracing::debug!(bytes = data.len(), "upload received");

    let request = UploadRequest {
        owner_id: user_id,
        original_filename: filename.unwrap_or_else(|| "unknown.pdf".to_string()),
        data,
    };

    let outcome = state
        .upload_pipeline
        .run(request)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(UploadResponse {
        message: "processing complete".to_string(),
        file_id: outcome.document_id.to_string(),
        translate_status: outcome.translate_status.as_str().to_string(),
    }))
}
