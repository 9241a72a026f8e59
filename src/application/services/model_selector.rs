use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::domain::{ModelDescriptor, ModelId};

pub const DEFAULT_PREFERRED_MODELS: [&str; 3] = [
    "models/gemini-1.5-flash",
    "models/gemini-pro",
    "models/gemini-1.5-pro",
];

/// Picks the chat model once at startup.
pub struct ModelSelector<L: LlmClient> {
    llm_client: Arc<L>,
    preferred: Vec<ModelId>,
}

impl<L: LlmClient> ModelSelector<L> {
    pub fn new(llm_client: Arc<L>, preferred: Vec<ModelId>) -> Self {
        Self {
            llm_client,
            preferred,
        }
    }

    /// Never fails: any provider error leaves the service without a model.
    #[tracing::instrument(skip(self))]
    pub async fn select(&self) -> Option<ModelId> {
        tracing::info!("Checking available models");

        let models = match self.llm_client.list_models().await {
            Ok(models) => models,
            Err(e) => {
                tracing::error!(error = %e, "Model listing failed, chat is disabled");
                return None;
            }
        };

        let selected = choose_model(&self.preferred, &models);
        match &selected {
            Some(model) => tracing::info!(model = %model, "Selected model"),
            None => tracing::warn!(
                listed = models.len(),
                "No supported models found for this API key"
            ),
        }
        selected
    }
}

/// First preferred model the provider can generate with, otherwise the first
/// capable model in provider order.
pub fn choose_model(preferred: &[ModelId], available: &[ModelDescriptor]) -> Option<ModelId> {
    let capable: Vec<&ModelId> = available
        .iter()
        .filter(|m| m.supports_generate_content())
        .map(|m| &m.id)
        .collect();

    preferred
        .iter()
        .find(|p| capable.contains(p))
        .or_else(|| capable.first().copied())
        .cloned()
}
