use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{GENERATE_CONTENT_METHOD, ModelDescriptor, ModelId};

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Empty,
    Fail(String),
}

/// Scripted in-memory provider that counts its calls.
pub struct MockLlmClient {
    reply: MockReply,
    models: Result<Vec<ModelDescriptor>, String>,
    delay: Option<Duration>,
    generate_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl MockLlmClient {
    pub fn answering(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Text(text.into()))
    }

    pub fn empty() -> Self {
        Self::with_reply(MockReply::Empty)
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Fail(message.into()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            models: Ok(vec![ModelDescriptor::new(
                "models/gemini-1.5-flash",
                vec![GENERATE_CONTENT_METHOD.to_string()],
            )]),
            delay: None,
            generate_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_models(mut self, models: Vec<ModelDescriptor>) -> Self {
        self.models = Ok(models);
        self
    }

    pub fn with_listing_error(mut self, message: impl Into<String>) -> Self {
        self.models = Err(message.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, LlmClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.models
            .clone()
            .map_err(LlmClientError::ApiRequestFailed)
    }

    async fn generate(
        &self,
        _model: &ModelId,
        _prompt: &str,
    ) -> Result<Option<String>, LlmClientError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            MockReply::Text(text) => Ok(Some(text.clone())),
            MockReply::Empty => Ok(None),
            MockReply::Fail(message) => Err(LlmClientError::ApiRequestFailed(message.clone())),
        }
    }
}
