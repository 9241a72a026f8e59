use async_trait::async_trait;

use crate::domain::{ModelDescriptor, ModelId};

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Lists every model the provider advertises for this credential.
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, LlmClientError>;

    /// Runs one single-turn generation. `Ok(None)` means the provider answered
    /// without any text.
    async fn generate(&self, model: &ModelId, prompt: &str)
    -> Result<Option<String>, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("no api key configured")]
    MissingApiKey,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
