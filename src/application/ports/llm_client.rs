use async_trait::async_trait;

/// One entry from the provider's model listing.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub name: String,
    pub supports_generation: bool,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Submits one prompt to the named model and returns the response text.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmClientError>;

    /// Lists the models the provider currently exposes.
    async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api key missing")]
    MissingApiKey,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
