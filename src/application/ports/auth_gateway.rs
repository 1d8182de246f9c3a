use async_trait::async_trait;

/// Session handed back by the auth provider on a successful login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub user_id: String,
    pub email: String,
    pub client_name: Option<String>,
}

/// External auth provider. Credential storage, token issuance, and password
/// policy all live on the provider side.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Registers a user and returns the provider-assigned user id.
    async fn sign_up(
        &self,
        client_name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("provider error: {0}")]
    Provider(String),
}
