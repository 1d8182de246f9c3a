use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::AuthError;
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub client_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user_id: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: LoginUser,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: String,
    pub email: String,
    pub client_name: Option<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let (Some(client_name), Some(email), Some(password)) =
        (request.client_name, request.email, request.password)
    else {
        return Err(ApiError::Validation(
            "clientName, email, and password are required".to_string(),
        ));
    };

    if client_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "clientName, email, and password are required".to_string(),
        ));
    }

    let user_id = state
        .auth_gateway
        .sign_up(&client_name, &email, &password)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(user_id = %user_id, "signup complete");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "signup successful".to_string(),
            user_id,
        }),
    ))
}

#[tracing::instrument(skip(state, request))]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(email), Some(password)) = (request.email, request.password) else {
        return Err(ApiError::Validation(
            "email and password are required".to_string(),
        ));
    };

    let session = state
        .auth_gateway
        .sign_in(&email, &password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => ApiError::Auth("login failed".to_string()),
            AuthError::Provider(message) => ApiError::Internal(message),
        })?;

    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        token: session.access_token,
        user: LoginUser {
            id: session.user_id,
            email: session.email,
            client_name: session.client_name,
        },
    }))
}
