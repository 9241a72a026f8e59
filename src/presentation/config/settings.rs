use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_CONVERSION_TIMEOUT, DEFAULT_MAX_MESSAGE_CHARS,
    DEFAULT_PREFERRED_MODELS, DEFAULT_REQUEST_TIMEOUT,
};
use crate::domain::ModelId;
use crate::infrastructure::llm::DEFAULT_GEMINI_BASE_URL;

use super::Environment;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_MAX_UPLOAD_SIZE_BYTES: i64 = 25 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub cache: CacheSettings,
    pub prompt: PromptSettings,
    pub conversion: ConversionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub preferred_models: Vec<String>,
    pub request_timeout_seconds: u64,
}

impl LlmSettings {
    pub fn preferred_model_ids(&self) -> Vec<ModelId> {
        self.preferred_models.iter().map(ModelId::new).collect()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptSettings {
    pub knowledge_base_path: Option<String>,
    pub max_message_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionSettings {
    pub scratch_dir: String,
    pub max_upload_size_bytes: usize,
    pub timeout_seconds: u64,
}

impl ConversionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.<env>.*`, then `APP_*` variables
    /// (`APP_CACHE__CAPACITY=50`), then `GEMINI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("llm.api_key", "")?
            .set_default("llm.base_url", DEFAULT_GEMINI_BASE_URL)?
            .set_default("llm.preferred_models", DEFAULT_PREFERRED_MODELS.to_vec())?
            .set_default(
                "llm.request_timeout_seconds",
                DEFAULT_REQUEST_TIMEOUT.as_secs() as i64,
            )?
            .set_default("cache.capacity", DEFAULT_CACHE_CAPACITY as i64)?
            .set_default("prompt.max_message_chars", DEFAULT_MAX_MESSAGE_CHARS as i64)?
            .set_default("conversion.scratch_dir", ".")?
            .set_default(
                "conversion.max_upload_size_bytes",
                DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            )?
            .set_default(
                "conversion.timeout_seconds",
                DEFAULT_CONVERSION_TIMEOUT.as_secs() as i64,
            )?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("llm.preferred_models")
                    .try_parsing(true),
            )
            .set_override_option("llm.api_key", std::env::var(API_KEY_VAR).ok())?
            .build()?
            .try_deserialize()
    }
}
