use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::application::ports::LlmClient;
use crate::domain::{CacheKey, ChatOutcome, ModelId, NO_MODEL_REPLY};
use crate::infrastructure::observability::preview_message;

use super::prompt_builder::PromptBuilder;
use super::response_cache::ResponseCache;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Answers visitor messages: cache first, then one provider call.
pub struct ChatService<L: LlmClient> {
    llm_client: Arc<L>,
    active_model: Option<ModelId>,
    prompt_builder: PromptBuilder,
    cache: Mutex<ResponseCache>,
    request_timeout: Duration,
}

impl<L: LlmClient> ChatService<L> {
    pub fn new(
        llm_client: Arc<L>,
        active_model: Option<ModelId>,
        prompt_builder: PromptBuilder,
        cache: ResponseCache,
        request_timeout: Duration,
    ) -> Self {
        Self {
            llm_client,
            active_model,
            prompt_builder,
            cache: Mutex::new(cache),
            request_timeout,
        }
    }

    pub fn active_model(&self) -> Option<&ModelId> {
        self.active_model.as_ref()
    }

    pub fn cached_entries(&self) -> usize {
        self.lock_cache().len()
    }

    pub fn is_cached(&self, message: &str) -> bool {
        self.lock_cache().contains(message)
    }

    /// Always produces a reply; failures map to fixed fallback text.
    #[tracing::instrument(skip_all)]
    pub async fn reply(&self, message: &str) -> String {
        let Some(model) = &self.active_model else {
            tracing::warn!("Chat request rejected, no model selected");
            return NO_MODEL_REPLY.to_string();
        };

        let key = CacheKey::from_message(message);
        let cached = self.lock_cache().get_by_key(&key).map(str::to_string);
        if let Some(hit) = cached {
            tracing::info!(message = %preview_message(message), "Cache hit");
            return hit;
        }

        let outcome = self.generate(model, message).await;

        match &outcome {
            ChatOutcome::Success(text) => {
                self.lock_cache().put_by_key(key, text.clone());
                tracing::info!(message = %preview_message(message), "Cached response");
            }
            ChatOutcome::EmptyOutput => {
                tracing::warn!(model = %model, "Model returned no text");
            }
            ChatOutcome::ProviderError(cause) => {
                tracing::error!(model = %model, error = %cause, "Model call failed");
            }
        }

        outcome.into_reply()
    }

    /// One bounded provider call, without touching the cache.
    pub async fn generate(&self, model: &ModelId, message: &str) -> ChatOutcome {
        let prompt = self.prompt_builder.build(message);

        match tokio::time::timeout(self.request_timeout, self.llm_client.generate(model, &prompt))
            .await
        {
            Ok(Ok(text)) => ChatOutcome::from_generated(text),
            Ok(Err(e)) => ChatOutcome::ProviderError(e.to_string()),
            Err(_) => ChatOutcome::ProviderError(format!(
                "no response within {} seconds",
                self.request_timeout.as_secs()
            )),
        }
    }

    fn lock_cache(&self) -> MutexGuard<'_, ResponseCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
