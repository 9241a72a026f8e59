use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{ModelDescriptor, ModelId};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";
const LIST_PAGE_SIZE: u32 = 1000;

/// Google Generative Language REST client.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn ensure_api_key(&self) -> Result<&str, LlmClientError> {
        if self.api_key.trim().is_empty() {
            return Err(LlmClientError::MissingApiKey);
        }
        Ok(&self.api_key)
    }

    async fn fetch_model_page(
        &self,
        api_key: &str,
        page_token: Option<&str>,
    ) -> Result<ListModelsResponse, LlmClientError> {
        let url = format!("{}/models", self.base_url);
        let page_size = LIST_PAGE_SIZE.to_string();
        let mut query = vec![("pageSize", page_size.as_str())];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                LlmClientError::ApiRequestFailed(format!("network error: {}", e.without_url()))
            })?;

        let response = check_status(response).await?;

        response
            .json::<ListModelsResponse>()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(format!("model listing: {e}")))
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    #[tracing::instrument(skip(self))]
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, LlmClientError> {
        let api_key = self.ensure_api_key()?;

        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.fetch_model_page(api_key, page_token.as_deref()).await?;

            models.extend(page.models.into_iter().map(|m| {
                ModelDescriptor::new(m.name, m.supported_generation_methods)
            }));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(count = models.len(), "Listed provider models");
        Ok(models)
    }

    #[tracing::instrument(skip(self, prompt), fields(model = %model, prompt_chars = prompt.len()))]
    async fn generate(
        &self,
        model: &ModelId,
        prompt: &str,
    ) -> Result<Option<String>, LlmClientError> {
        let api_key = self.ensure_api_key()?;
        let url = format!("{}/{}:generateContent", self.base_url, model.as_str());

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                LlmClientError::ApiRequestFailed(format!("network error: {}", e.without_url()))
            })?;

        let response = check_status(response).await?;

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(format!("generate content: {e}")))?;

        Ok(body.text())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, LlmClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(LlmClientError::RateLimited);
    }

    Err(LlmClientError::ApiRequestFailed(format!(
        "status {status}: {error_text}"
    )))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelEntry {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if it has any.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}
