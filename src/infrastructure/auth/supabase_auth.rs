use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::ports::{AuthError, AuthGateway, AuthSession};

/// Supabase GoTrue adapter: signup and password login. Token issuance and
/// credential storage stay entirely on the provider side.
pub struct SupabaseAuthGateway {
    client: Client,
    base_url: String,
    service_key: String,
}

#[derive(Deserialize)]
struct UserPayload {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

#[derive(Deserialize)]
struct SignUpResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    user: Option<UserPayload>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: UserPayload,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

impl SupabaseAuthGateway {
    pub fn new(base_url: String, service_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
        }
    }
}

#[async_trait]
impl AuthGateway for SupabaseAuthGateway {
    #[tracing::instrument(skip(self, password))]
    async fn sign_up(
        &self,
        client_name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let body = json!({
            "email": email,
            "password": password,
            "data": { "client_name": client_name },
        });

        let response = self
            .client
            .post(format!("{}/auth/v1/signup", self.base_url))
            .header("apikey", &self.service_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Provider(format!("HTTP {}: {}", status, body)));
        }

        let signup: SignUpResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        // GoTrue returns the user inline or nested depending on confirmation
        // settings.
        signup
            .id
            .or(signup.user.map(|u| u.id))
            .ok_or_else(|| AuthError::Provider("signup response carried no user id".to_string()))
    }

    #[tracing::instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .post(format!(
                "{}/auth/v1/token?grant_type=password",
                self.base_url
            ))
            .header("apikey", &self.service_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        if response.status() == reqwest::StatusCode::BAD_REQUEST
            || response.status() == reqwest::StatusCode::UNAUTHORIZED
        {
            return Err(AuthError::InvalidCredentials);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Provider(format!("HTTP {}: {}", status, body)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        let client_name = token
            .user
            .user_metadata
            .get("client_name")
            .and_then(|v| v.as_str())
            .map(String::from);

        Ok(AuthSession {
            access_token: token.access_token,
            user_id: token.user.id,
            email: token.user.email.unwrap_or_else(|| email.to_string()),
            client_name,
        })
    }
}
